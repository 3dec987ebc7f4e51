use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;
use crate::routes::HOME_PATH;
use crate::widgets::menu::{MenuEffect, MenuIntent};

/// Reduce a sidebar intent into menu updates and effect events.
pub(super) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
) -> Task<SidebarEvent> {
    match intent {
        SidebarIntent::Menu(intent) => reduce_menu(state, intent),
        SidebarIntent::LogoPressed => navigate(HOME_PATH),
        SidebarIntent::ResourcePressed { target } => {
            navigate(target.as_str())
        },
        SidebarIntent::ScrimPressed => {
            Task::done(SidebarEvent::Effect(SidebarEffect::Dismiss))
        },
    }
}

fn reduce_menu(
    state: &mut SidebarState,
    intent: MenuIntent,
) -> Task<SidebarEvent> {
    let Some(node) = state.menu_node_mut(intent.address()) else {
        log::debug!("menu intent for unknown node {:?}", intent.address());
        return Task::none();
    };

    node.reduce(intent).map(|effect| match effect {
        MenuEffect::Navigate { target } => {
            SidebarEvent::Effect(SidebarEffect::Navigate { target })
        },
    })
}

fn navigate(target: &str) -> Task<SidebarEvent> {
    Task::done(SidebarEvent::Effect(SidebarEffect::Navigate {
        target: String::from(target),
    }))
}

#[cfg(test)]
mod tests {
    use focca_ui_menu::{MenuNode, MenuTree};

    use crate::widgets::menu::{MenuIntent, NodeAddress};
    use crate::widgets::sidebar::{SidebarIntent, SidebarWidget};

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::leaf("introduction", "Introduction", "/docs"),
            MenuNode::group(
                "database",
                "Database",
                vec![MenuNode::leaf(
                    "mysql",
                    "Using Mysql",
                    "/docs/database/mysql",
                )],
            ),
            MenuNode::group(
                "migration",
                "ORM",
                vec![MenuNode::leaf(
                    "migration",
                    "Migrations",
                    "/docs/orm/migration",
                )],
            ),
        ])
    }

    fn row(ids: &[&str]) -> SidebarIntent {
        SidebarIntent::Menu(MenuIntent::RowPressed {
            address: NodeAddress::find(tree().roots(), ids),
        })
    }

    #[test]
    fn given_tree_when_mounted_then_top_level_entries_keep_definition_order() {
        let widget = SidebarWidget::new(&tree());

        let labels: Vec<&str> =
            widget.vm().menu.iter().map(|vm| vm.node.label()).collect();

        assert_eq!(labels, vec!["Introduction", "Database", "ORM"]);
        assert_eq!(widget.vm().resources[0].target, "/docs/utils");
    }

    #[test]
    fn given_group_press_when_reduced_then_only_that_group_expands() {
        let mut widget = SidebarWidget::new(&tree());

        let _task = widget.reduce(row(&["database"]));

        let vm = widget.vm();
        assert!(vm.menu[1].expanded);
        assert!(!vm.menu[2].expanded);
    }

    #[test]
    fn given_child_sharing_parent_id_when_pressed_then_parent_stays_open() {
        let mut widget = SidebarWidget::new(&tree());
        let _open = widget.reduce(row(&["migration"]));

        let _press = widget.reduce(row(&["migration", "migration"]));

        let vm = widget.vm();
        assert!(vm.menu[2].expanded);
        assert_eq!(vm.menu[2].children[0].node.label(), "Migrations");
    }

    #[test]
    fn given_unknown_root_when_reduced_then_menu_is_unchanged() {
        let mut widget = SidebarWidget::new(&tree());

        let _task = widget.reduce(row(&["missing"]));

        assert!(widget.vm().menu.iter().all(|vm| !vm.expanded));
    }

    #[test]
    fn given_duplicate_root_ids_when_second_pressed_then_only_second_expands()
    {
        let mysql = || {
            vec![MenuNode::leaf("mysql", "Using Mysql", "/docs/database/mysql")]
        };
        let tree = MenuTree::new(vec![
            MenuNode::group("database", "Database", mysql()),
            MenuNode::group("database", "More databases", mysql()),
        ]);
        let mut widget = SidebarWidget::new(&tree);

        let second = widget.vm().menu[1].address.clone();
        let _task = widget.reduce(SidebarIntent::Menu(MenuIntent::RowPressed {
            address: second,
        }));

        let vm = widget.vm();
        assert!(!vm.menu[0].expanded);
        assert!(vm.menu[1].expanded);
    }
}
