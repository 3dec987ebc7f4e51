use iced::widget::{
    Row, Space, Stack, button, column, container, scrollable, svg, text, tooltip,
};
use iced::{Border, Element, Font, Length, alignment};

use super::event::CodeViewerIntent;
use super::model::CodeViewerViewModel;
use crate::icons::{CHECK, COPY};
use crate::theme::SitePalette;

const PADDING: f32 = 16.0;
const RADIUS: f32 = 8.0;
const TAB_TEXT_SIZE: f32 = 14.0;
const TAB_PADDING: [f32; 2] = [8.0, 16.0];
const TAB_UNDERLINE: f32 = 2.0;
const CODE_TEXT_SIZE: f32 = 14.0;
const CODE_PADDING: f32 = 8.0;
const COPY_ICON_SIZE: f32 = 18.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;

/// Props for rendering a code viewer.
pub(crate) struct CodeViewerProps<'a> {
    pub(crate) vm: CodeViewerViewModel<'a>,
    pub(crate) palette: &'a SitePalette,
}

/// Render the tab strip (when needed), the active code and a copy button.
pub(crate) fn view(props: CodeViewerProps<'_>) -> Element<'_, CodeViewerIntent> {
    let vm = props.vm;
    let palette = props.palette;
    let background = palette.code_background;
    let foreground = palette.code_foreground;

    let mut content = column![].spacing(8.0).width(Length::Fill);
    if vm.shows_tab_strip {
        content = content.push(tab_strip(vm, palette));
    }
    content = content.push(code_area(vm, palette));

    container(content)
        .width(Length::Fill)
        .padding(PADDING)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: Border {
                radius: RADIUS.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

fn tab_strip<'a>(
    vm: CodeViewerViewModel<'a>,
    palette: &'a SitePalette,
) -> Element<'a, CodeViewerIntent> {
    let active = palette.code_foreground;
    let inactive = palette.code_muted;

    let tabs = vm.blocks.iter().enumerate().map(|(index, block)| {
        let is_active = index == vm.active_tab;
        let color = if is_active { active } else { inactive };
        let label = text(block.label().unwrap_or_default()).size(TAB_TEXT_SIZE);

        let tab = button(label)
            .padding(TAB_PADDING)
            .on_press(CodeViewerIntent::SelectTab { index })
            .style(move |_, _| button::Style {
                background: None,
                text_color: color,
                ..button::Style::default()
            });

        let underline = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(TAB_UNDERLINE))
            .style(move |_| container::Style {
                background: is_active.then(|| active.into()),
                ..Default::default()
            });

        Element::from(column![tab, underline].width(Length::Shrink))
    });

    Row::with_children(tabs).into()
}

fn code_area<'a>(
    vm: CodeViewerViewModel<'a>,
    palette: &'a SitePalette,
) -> Element<'a, CodeViewerIntent> {
    let surface = palette.code_surface;

    let code = scrollable(
        text(vm.code())
            .font(Font::MONOSPACE)
            .size(CODE_TEXT_SIZE),
    )
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(4).scroller_width(4),
    ))
    .width(Length::Fill);

    let code = container(code)
        .width(Length::Fill)
        .padding(CODE_PADDING)
        .style(move |_| container::Style {
            background: Some(surface.into()),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..Default::default()
        });

    let copy = container(copy_button(vm.copied, palette))
        .width(Length::Fill)
        .padding(CODE_PADDING)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    Stack::new().push(code).push(copy).width(Length::Fill).into()
}

fn copy_button<'a>(
    copied: bool,
    palette: &'a SitePalette,
) -> Element<'a, CodeViewerIntent> {
    let icon = if copied { CHECK } else { COPY };
    let hint = if copied { "Copied!" } else { "Copy" };
    let surface = palette.code_surface;
    let foreground = palette.code_foreground;

    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(COPY_ICON_SIZE))
        .height(Length::Fixed(COPY_ICON_SIZE));

    let control = button(icon)
        .padding(2)
        .on_press(CodeViewerIntent::Copy)
        .style(|_, _| button::Style {
            background: None,
            ..button::Style::default()
        });

    let hint = container(text(hint).size(TOOLTIP_TEXT_SIZE))
        .padding([2.0, 6.0])
        .style(move |_| container::Style {
            background: Some(surface.into()),
            text_color: Some(foreground),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..Default::default()
        });

    tooltip(control, hint, tooltip::Position::Left).into()
}
