use iced::widget::{Column, Row, Space, button, container, row, text};
use iced::{Element, Font, Length, font};

use super::event::ContentIntent;
use super::model::ContentViewModel;
use crate::content::{Bullet, ContentBlock, HeadingLevel, PageLink};
use crate::theme::SitePalette;
use crate::widgets::code_viewer;

const MAX_WIDTH: f32 = 768.0;
const PADDING: [f32; 2] = [32.0, 24.0];
const BLOCK_SPACING: f32 = 16.0;
const TITLE_SIZE: f32 = 32.0;
const SECTION_SIZE: f32 = 24.0;
const SUBSECTION_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 16.0;
const CALLOUT_BAR: f32 = 4.0;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Props for rendering the page content region.
pub(crate) struct ContentProps<'a> {
    pub(crate) vm: ContentViewModel<'a>,
    pub(crate) palette: &'a SitePalette,
}

/// Render the page title and its blocks inside a centred column.
pub(crate) fn view(props: ContentProps<'_>) -> Element<'_, ContentIntent> {
    let palette = props.palette;
    let mut viewers = props.vm.viewers.into_iter().enumerate();

    let mut page = Column::new()
        .spacing(BLOCK_SPACING)
        .width(Length::Fill)
        .push(text(props.vm.title).size(TITLE_SIZE).font(BOLD));

    for block in props.vm.blocks {
        let element: Element<'_, ContentIntent> = match block {
            ContentBlock::Heading { level, text: heading } => {
                let size = match level {
                    HeadingLevel::Section => SECTION_SIZE,
                    HeadingLevel::Subsection => SUBSECTION_SIZE,
                };
                text(heading.as_str()).size(size).font(BOLD).into()
            },
            ContentBlock::Paragraph(body) => {
                text(body.as_str()).size(BODY_SIZE).into()
            },
            ContentBlock::Callout(body) => callout(body, palette),
            ContentBlock::Bullets(bullets) => bullet_list(bullets),
            ContentBlock::Links(links) => link_row(links, palette),
            ContentBlock::Code(_) => match viewers.next() {
                Some((index, vm)) => code_viewer::view::view(
                    code_viewer::view::CodeViewerProps { vm, palette },
                )
                .map(move |intent| ContentIntent::CodeViewer { index, intent }),
                None => continue,
            },
        };
        page = page.push(element);
    }

    container(container(page).max_width(MAX_WIDTH).padding(PADDING))
        .center_x(Length::Fill)
        .into()
}

fn callout<'a>(
    body: &'a str,
    palette: &'a SitePalette,
) -> Element<'a, ContentIntent> {
    let accent = palette.accent;
    let muted = palette.muted;

    let bar = container(Space::new())
        .width(Length::Fixed(CALLOUT_BAR))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(accent.into()),
            ..Default::default()
        });
    let quote = container(text(body).size(BODY_SIZE).font(Font {
        style: font::Style::Italic,
        ..Font::DEFAULT
    }))
    .padding([4.0, 12.0])
    .width(Length::Fill)
    .style(move |_| container::Style {
        text_color: Some(muted),
        ..Default::default()
    });

    row![bar, quote].height(Length::Shrink).into()
}

fn bullet_list(bullets: &[Bullet]) -> Element<'_, ContentIntent> {
    Column::with_children(bullets.iter().map(|bullet| {
        let mut line =
            Row::new().spacing(8.0).push(text("\u{2022}").size(BODY_SIZE));
        if let Some(term) = bullet.term.as_deref() {
            line = line
                .push(text(format!("{term}:")).size(BODY_SIZE).font(BOLD));
        }
        let body = text(bullet.text.as_str())
            .size(BODY_SIZE)
            .width(Length::Fill);
        Element::from(line.push(body))
    }))
    .spacing(8.0)
    .padding([0.0, 8.0])
    .into()
}

fn link_row<'a>(
    links: &'a [PageLink],
    palette: &'a SitePalette,
) -> Element<'a, ContentIntent> {
    let accent = palette.accent;
    let hover = palette.accent_soft;

    let buttons = links.iter().map(|link| {
        Element::from(
            button(text(link.label.as_str()).size(BODY_SIZE).font(BOLD))
                .padding([4.0, 0.0])
                .on_press(ContentIntent::LinkPressed {
                    target: link.target.clone(),
                })
                .style(move |_, status| button::Style {
                    background: None,
                    text_color: match status {
                        button::Status::Hovered | button::Status::Pressed => {
                            hover
                        },
                        _ => accent,
                    },
                    ..button::Style::default()
                }),
        )
    });

    Row::with_children(buttons).spacing(24.0).wrap().into()
}
