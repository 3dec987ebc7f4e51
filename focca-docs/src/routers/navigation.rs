use iced::Task;

use crate::app::{App, AppEvent, Widgets};
use crate::content::{Page, catalog};
use crate::routes::RouteTable;

/// Show the page for `target`.
///
/// The outgoing page is torn down first so its copy feedback timers stop,
/// then the page shell, sidebar and content are mounted fresh: the overlay
/// starts hidden and every menu group starts collapsed.
pub(crate) fn navigate(app: &mut App, target: String) -> Task<AppEvent> {
    let page = resolve_page(&app.routes, &target);
    app.widgets.content.teardown();
    app.widgets = Widgets::new(&app.menu, page);
    Task::none()
}

/// Resolve a navigation target to its page, or the not-found page.
pub(crate) fn resolve_page(routes: &RouteTable, target: &str) -> Page {
    match routes.resolve(target) {
        Some(route) => {
            log::info!("navigating to {}", routes.href(route));
            catalog::page(route)
        },
        None => {
            log::warn!("no page for navigation target {target:?}");
            catalog::not_found(target)
        },
    }
}

#[cfg(test)]
mod tests {
    use focca_ui_menu::MenuTree;

    use super::resolve_page;
    use crate::app::Widgets;
    use crate::content::default_menu;
    use crate::routes::RouteTable;
    use crate::widgets::menu::{MenuIntent, NodeAddress};
    use crate::widgets::page_shell::{PageShellIntent, SidebarVisibility};
    use crate::widgets::sidebar::SidebarIntent;

    fn routes() -> RouteTable {
        RouteTable::new("/focca-orm")
    }

    #[test]
    fn given_basename_target_when_resolved_then_route_page_is_returned() {
        let page = resolve_page(&routes(), "/focca-orm/docs/getting-started");

        assert_eq!(page.title(), "FOCCA Library Installation");
    }

    #[test]
    fn given_unknown_target_when_resolved_then_not_found_page_is_returned() {
        let page = resolve_page(&routes(), "/docs/orm/schema-builder");

        assert_eq!(page.title(), "Page not found");
    }

    #[test]
    fn given_open_overlay_and_expanded_group_when_remounted_then_state_resets()
    {
        let menu = MenuTree::from_entries(default_menu());
        let mut widgets = Widgets::new(&menu, resolve_page(&routes(), "/docs"));
        widgets.page_shell.reduce(PageShellIntent::ToggleSidebar);
        let _toggle = widgets.sidebar.reduce(SidebarIntent::Menu(
            MenuIntent::RowPressed {
                address: NodeAddress::find(menu.roots(), &["database"]),
            },
        ));
        assert!(widgets.sidebar.vm().menu[3].expanded);
        assert_eq!(widgets.page_shell.vm().sidebar, SidebarVisibility::Visible);

        widgets.content.teardown();
        let widgets = Widgets::new(&menu, resolve_page(&routes(), "/docs/utils"));

        assert_eq!(widgets.page_shell.vm().sidebar, SidebarVisibility::Hidden);
        assert!(widgets.sidebar.vm().menu.iter().all(|node| !node.expanded));
        assert!(widgets.content.title().contains("Utility Classes"));
    }
}
