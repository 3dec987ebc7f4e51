use iced::widget::{Stack, button, container, mouse_area, svg};
use iced::{Element, Length, alignment, mouse};

use super::event::ChromeIntent;
use crate::icons::{LOGO, MENU};
use crate::layout::Viewport;
use crate::theme::SitePalette;

pub(crate) const HEADER_HEIGHT: f32 = 72.0;
const HEADER_PADDING_X: f32 = 24.0;
const LOGO_WIDTH: f32 = 120.0;
const LOGO_HEIGHT: f32 = 32.0;
const MENU_ICON_SIZE: f32 = 24.0;

/// Props for rendering the site header.
pub(crate) struct HeaderProps<'a> {
    pub(crate) viewport: Viewport,
    pub(crate) palette: &'a SitePalette,
}

/// Render the header: centred logo, menu control on narrow viewports.
pub(crate) fn view(props: HeaderProps<'_>) -> Element<'_, ChromeIntent> {
    let background = props.palette.background;

    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO))
        .width(Length::Fixed(LOGO_WIDTH))
        .height(Length::Fixed(LOGO_HEIGHT));
    let logo = mouse_area(logo)
        .on_press(ChromeIntent::LogoPressed)
        .interaction(mouse::Interaction::Pointer);

    let center = container(logo)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut layers = Stack::new()
        .push(center)
        .width(Length::Fill)
        .height(Length::Fill);

    if props.viewport.is_narrow() {
        let icon = svg::Svg::new(svg::Handle::from_memory(MENU))
            .width(Length::Fixed(MENU_ICON_SIZE))
            .height(Length::Fixed(MENU_ICON_SIZE));
        let toggle = button(icon)
            .padding(4)
            .on_press(ChromeIntent::ToggleSidebar)
            .style(|_, _| button::Style {
                background: None,
                ..button::Style::default()
            });

        layers = layers.push(
            container(toggle)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Center),
        );
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
