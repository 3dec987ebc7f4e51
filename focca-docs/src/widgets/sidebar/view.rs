use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, button, column, container, mouse_area, scrollable, svg,
    text,
};
use iced::{Border, Element, Length, Shadow, Vector, alignment, mouse};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::icons::LOGO;
use crate::theme::SitePalette;
use crate::widgets::menu;

const PADDING: [f32; 2] = [8.0, 16.0];
const LOGO_WIDTH: f32 = 120.0;
const LOGO_HEIGHT: f32 = 32.0;
const SECTION_TITLE_SIZE: f32 = 12.0;
const SECTION_SPACING: f32 = 16.0;
const RESOURCES_GAP: f32 = 32.0;
const RESOURCE_TEXT_SIZE: f32 = 15.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// Props for rendering the sidebar panel.
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) width: f32,
    pub(crate) palette: &'a SitePalette,
}

/// Render the sidebar panel: logo, documentation menu, resources.
pub(crate) fn view(props: SidebarProps<'_>) -> Element<'_, SidebarIntent> {
    let palette = props.palette;
    let background = palette.background;
    let border = palette.border;

    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO))
        .width(Length::Fixed(LOGO_WIDTH))
        .height(Length::Fixed(LOGO_HEIGHT));
    let logo = container(
        mouse_area(logo)
            .on_press(SidebarIntent::LogoPressed)
            .interaction(mouse::Interaction::Pointer),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let menu = Column::with_children(props.vm.menu.into_iter().map(|vm| {
        menu::view::view(menu::view::MenuNodeProps { vm, palette })
            .map(SidebarIntent::Menu)
    }))
    .spacing(4.0)
    .width(Length::Fill);

    let resources = Column::with_children(props.vm.resources.iter().map(
        |link| {
            let foreground = palette.foreground;
            let hover = palette.hover;
            Element::from(
                button(text(link.label).size(RESOURCE_TEXT_SIZE))
                    .width(Length::Fill)
                    .padding([8.0, 12.0])
                    .on_press(SidebarIntent::ResourcePressed {
                        target: String::from(link.target),
                    })
                    .style(move |_, status| button::Style {
                        background: matches!(status, button::Status::Hovered)
                            .then(|| hover.into()),
                        text_color: foreground,
                        ..button::Style::default()
                    }),
            )
        },
    ))
    .width(Length::Fill);

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(border.into()),
            ..Default::default()
        });

    let content = column![
        logo,
        section_title("DOCUMENTATION", palette),
        menu,
        Space::new().height(Length::Fixed(RESOURCES_GAP)),
        separator,
        section_title("RESOURCES", palette),
        resources,
    ]
    .spacing(SECTION_SPACING)
    .width(Length::Fill);

    let panel = scrollable(container(content).padding(PADDING))
        .width(Length::Fill)
        .height(Length::Fill);

    container(panel)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                width: 1.0,
                color: border,
                radius: 0.0.into(),
            },
            shadow: Shadow {
                color: iced::Color::from_rgba8(0, 0, 0, 0.1),
                offset: Vector::new(2.0, 0.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

/// Render the full-window scrim drawn behind the open narrow sidebar.
pub(crate) fn scrim(palette: &SitePalette) -> Element<'_, SidebarIntent> {
    let color = palette.scrim;

    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(color.into()),
                ..Default::default()
            }),
    )
    .on_press(SidebarIntent::ScrimPressed)
    .into()
}

fn section_title<'a>(
    title: &'a str,
    palette: &'a SitePalette,
) -> Element<'a, SidebarIntent> {
    let muted = palette.muted;

    container(
        text(title)
            .size(SECTION_TITLE_SIZE)
            .wrapping(Wrapping::None)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
    )
    .width(Length::Fill)
    .style(move |_| container::Style {
        text_color: Some(muted),
        ..Default::default()
    })
    .into()
}
