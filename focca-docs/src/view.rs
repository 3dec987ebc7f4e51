use iced::widget::{Space, Stack, column, container, row, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::layout::{self, Layer, SidebarPlacement};
use crate::theme::SitePalette;
use crate::widgets::chrome::view::HEADER_HEIGHT;
use crate::widgets::chrome::{self, ChromeEvent};
use crate::widgets::content::{self, ContentEvent};
use crate::widgets::sidebar::{self, SidebarEvent};

const FOOTER_PADDING: f32 = 24.0;
const FOOTER_TEXT_SIZE: f32 = 14.0;
const COPYRIGHT: &str = "\u{a9} 2023 FOCCA. All rights reserved.";

/// Render the root application view.
///
/// Layers follow [`SidebarPlacement::layers`]: page body, the scrim of the
/// open narrow overlay, the header, the sidebar panel.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let shell = app.widgets.page_shell.vm();
    let placement = layout::sidebar_placement(
        app.viewport,
        shell.sidebar,
        app.config.sidebar_width,
    );

    let layers = placement.layers().into_iter().map(|layer| match layer {
        Layer::Body => body(app),
        Layer::Scrim => sidebar::view::scrim(&app.palette)
            .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent))),
        Layer::Header => header(app),
        Layer::Sidebar => panel(app, &placement),
    });

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let header = chrome::view::view(chrome::view::HeaderProps {
        viewport: app.viewport,
        palette: &app.palette,
    })
    .map(|intent| AppEvent::Chrome(ChromeEvent::Intent(intent)));

    container(header)
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

/// Page content and footer below the header row, offset past the pinned
/// sidebar on wide viewports.
fn body(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = &app.palette;

    let page = content::view::view(content::view::ContentProps {
        vm: app.widgets.content.vm(),
        palette,
    })
    .map(|intent| AppEvent::Content(ContentEvent::Intent(intent)));

    let scroll = scrollable(column![page, footer(palette)].width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let offset = layout::content_offset(app.viewport, app.config.sidebar_width);
    let main = row![Space::new().width(Length::Fixed(offset)), scroll]
        .width(Length::Fill)
        .height(Length::Fill);

    column![Space::new().height(Length::Fixed(HEADER_HEIGHT)), main]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn panel<'a>(
    app: &'a App,
    placement: &SidebarPlacement,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    sidebar::view::view(sidebar::view::SidebarProps {
        vm: app.widgets.sidebar.vm(),
        width: placement.width,
        palette: &app.palette,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)))
}

fn footer(palette: &SitePalette) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let background = palette.footer_background;
    let foreground = palette.footer_foreground;

    container(text(COPYRIGHT).size(FOOTER_TEXT_SIZE))
        .width(Length::Fill)
        .padding(FOOTER_PADDING)
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}
