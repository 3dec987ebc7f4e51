use focca_ui_menu::MenuRow;
use iced::widget::{Column, column, container, svg};
use iced::{Element, Length};

use super::event::MenuIntent;
use super::model::MenuNodeViewModel;
use crate::icons::{CHEVRON_DOWN, CHEVRON_UP};
use crate::theme::SitePalette;

const ROOT_ROW_HEIGHT: f32 = 36.0;
const CHILD_ROW_HEIGHT: f32 = 32.0;
const ROOT_TEXT_SIZE: f32 = 15.0;
const CHILD_TEXT_SIZE: f32 = 14.0;
const INDENT_WIDTH: f32 = 16.0;
const CHEVRON_SIZE: f32 = 16.0;

/// Props for rendering one top-level menu node and its mounted subtree.
pub(crate) struct MenuNodeProps<'a> {
    pub(crate) vm: MenuNodeViewModel<'a>,
    pub(crate) palette: &'a SitePalette,
}

/// Render a menu node, then its children below it when expanded.
pub(crate) fn view(props: MenuNodeProps<'_>) -> Element<'_, MenuIntent> {
    render_node(props.vm, props.palette)
}

fn render_node<'a>(
    vm: MenuNodeViewModel<'a>,
    palette: &'a SitePalette,
) -> Element<'a, MenuIntent> {
    let node = vm.node;
    let is_root = vm.depth == 0;
    let is_leaf = node.is_leaf();
    let link_address = vm.address.clone();
    let foreground = if is_root {
        palette.foreground
    } else {
        palette.muted
    };

    let row = MenuRow::new(node, vm.depth)
        .expanded(vm.expanded)
        .indent_width(INDENT_WIDTH)
        .height(if is_root {
            ROOT_ROW_HEIGHT
        } else {
            CHILD_ROW_HEIGHT
        })
        .text_size(if is_root {
            ROOT_TEXT_SIZE
        } else {
            CHILD_TEXT_SIZE
        })
        .on_toggle(MenuIntent::RowPressed {
            address: vm.address.clone(),
        })
        .on_navigate(move |_target| {
            let address = link_address.clone();
            // Leaf rows resolve their target in the reducer; a group's
            // target link is its own intent so it never toggles.
            if is_leaf {
                MenuIntent::RowPressed { address }
            } else {
                MenuIntent::TargetPressed { address }
            }
        })
        .disclosure(|expanded| chevron(expanded))
        .row_style(move |_| container::Style {
            text_color: Some(foreground),
            ..Default::default()
        })
        .view();

    if vm.children.is_empty() {
        return row;
    }

    let children = vm
        .children
        .into_iter()
        .map(|child| render_node(child, palette));

    column![row, Column::with_children(children)]
        .width(Length::Fill)
        .into()
}

fn chevron<'a>(expanded: bool) -> Element<'a, MenuIntent> {
    let icon = if expanded { CHEVRON_UP } else { CHEVRON_DOWN };

    svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(CHEVRON_SIZE))
        .height(Length::Fixed(CHEVRON_SIZE))
        .into()
}
