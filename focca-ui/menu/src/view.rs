use iced::alignment;
use iced::widget::{Row, Space, button, container, mouse_area, text};
use iced::{Element, Length, mouse};

use crate::model::{MenuNode, RowAction};

const DEFAULT_ROW_HEIGHT: f32 = 36.0;
const DEFAULT_TEXT_SIZE: f32 = 14.0;
const DEFAULT_PADDING_X: f32 = 12.0;
const DISCLOSURE_WIDTH: f32 = 16.0;

type NavigateAction<'a, Message> = dyn Fn(&str) -> Message + 'a;
type Disclosure<'a, Message> = dyn Fn(bool) -> Element<'a, Message> + 'a;
type RowStyle<'a> = dyn Fn(&MenuNode) -> container::Style + 'a;

/// Renders a single menu row: indentation, label and, for expandable nodes,
/// a disclosure control.
///
/// Children are not rendered here; the owner of the expanded flag decides
/// whether to place child rows below.
pub struct MenuRow<'a, Message: Clone + 'a> {
    node: &'a MenuNode,
    depth: usize,
    expanded: bool,
    on_toggle: Option<Message>,
    on_navigate: Option<Box<NavigateAction<'a, Message>>>,
    disclosure: Option<Box<Disclosure<'a, Message>>>,
    row_style: Option<Box<RowStyle<'a>>>,
    indent_width: f32,
    height: f32,
    padding_x: f32,
    text_size: f32,
}

impl<'a, Message> MenuRow<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a row for `node` at the given tree depth.
    pub fn new(node: &'a MenuNode, depth: usize) -> Self {
        Self {
            node,
            depth,
            expanded: false,
            on_toggle: None,
            on_navigate: None,
            disclosure: None,
            row_style: None,
            indent_width: 0.0,
            height: DEFAULT_ROW_HEIGHT,
            padding_x: DEFAULT_PADDING_X,
            text_size: DEFAULT_TEXT_SIZE,
        }
    }

    /// Provide the current expanded flag (expandable nodes only).
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Emit a message when the row of an expandable node is pressed.
    pub fn on_toggle(mut self, message: Message) -> Self {
        self.on_toggle = Some(message);
        self
    }

    /// Emit a message when a navigation target is pressed.
    pub fn on_navigate(
        mut self,
        on_navigate: impl Fn(&str) -> Message + 'a,
    ) -> Self {
        self.on_navigate = Some(Box::new(on_navigate));
        self
    }

    /// Provide the disclosure control content for expandable nodes.
    pub fn disclosure(
        mut self,
        disclosure: impl Fn(bool) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.disclosure = Some(Box::new(disclosure));
        self
    }

    /// Provide a container style for the row.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&MenuNode) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Set indentation width per depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the fixed row height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height.max(0.0);
        self
    }

    /// Set the label text size.
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Whether this row renders a disclosure control.
    pub fn has_disclosure(&self) -> bool {
        self.node.is_expandable()
    }

    /// Build the `Element` for the row.
    pub fn view(self) -> Element<'a, Message> {
        let node: &'a MenuNode = self.node;
        let mut row =
            Row::new().spacing(0.0).align_y(alignment::Vertical::Center);

        let indent = self.depth as f32 * self.indent_width;
        if indent > 0.0 {
            row = row.push(Space::new().width(Length::Fixed(indent)));
        }

        row = row.push(
            container(self.label_element())
                .width(Length::Fill)
                .align_y(alignment::Vertical::Center),
        );

        if self.has_disclosure() {
            let content = match self.disclosure.as_ref() {
                Some(disclosure) => disclosure(self.expanded),
                None => default_disclosure(self.expanded, self.text_size),
            };
            row = row.push(
                container(content)
                    .width(Length::Fixed(DISCLOSURE_WIDTH))
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            );
        }

        let mut content = container(row)
            .width(Length::Fill)
            .height(Length::Fixed(self.height))
            .padding([0.0, self.padding_x])
            .align_y(alignment::Vertical::Center);

        if let Some(row_style) = self.row_style.as_ref() {
            let style = row_style(node);
            content = content.style(move |_| style);
        }

        let message = match node.row_action() {
            RowAction::Toggle => self.on_toggle.clone(),
            RowAction::Navigate(target) => {
                self.on_navigate.as_ref().map(|navigate| navigate(target))
            },
            RowAction::None => None,
        };

        match message {
            Some(message) => mouse_area(content)
                .on_press(message)
                .interaction(mouse::Interaction::Pointer)
                .into(),
            None => content.into(),
        }
    }

    /// Label of the row. A group that also has a target gets its own link
    /// affordance so that following it does not toggle the group.
    fn label_element(&self) -> Element<'a, Message> {
        let node: &'a MenuNode = self.node;
        let label = text(node.label()).size(self.text_size);

        let link = match (node, self.on_navigate.as_ref()) {
            (
                MenuNode::Group {
                    target: Some(target),
                    ..
                },
                Some(navigate),
            ) => Some(navigate(target.as_str())),
            _ => None,
        };

        match link {
            Some(message) => button(label)
                .on_press(message)
                .padding(0)
                .style(|_, _| button::Style::default())
                .into(),
            None => label.into(),
        }
    }
}

fn default_disclosure<'a, Message: 'a>(
    expanded: bool,
    size: f32,
) -> Element<'a, Message> {
    text(if expanded { "\u{25B4}" } else { "\u{25BE}" })
        .size(size)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Message {
        Toggle,
        Navigate(String),
    }

    #[test]
    fn leaf_rows_have_no_disclosure_control() {
        let node = MenuNode::leaf("intro", "Introduction", "/docs");
        let row: MenuRow<'_, Message> = MenuRow::new(&node, 0)
            .on_toggle(Message::Toggle)
            .on_navigate(|target| Message::Navigate(target.to_owned()));

        assert!(!row.has_disclosure());
    }

    #[test]
    fn group_rows_have_a_disclosure_control() {
        let node = MenuNode::group(
            "database",
            "Database",
            vec![MenuNode::leaf("mysql", "Using Mysql", "/docs/database/mysql")],
        );
        let row: MenuRow<'_, Message> =
            MenuRow::new(&node, 0).expanded(true).on_toggle(Message::Toggle);

        assert!(row.has_disclosure());
    }

    #[test]
    fn label_rows_have_no_disclosure_control() {
        let node = MenuNode::group("soon", "Coming soon", Vec::new());
        let row: MenuRow<'_, Message> = MenuRow::new(&node, 1);

        assert!(!row.has_disclosure());
    }
}
