//! Navigation menu model and a small [`iced`] row renderer.
//!
//! The crate is split into two layers:
//! - model helpers ([`MenuEntry`], [`MenuNode`], [`MenuTree`]) that are
//!   UI-agnostic;
//! - a view helper ([`MenuRow`]) that renders one entry in `iced`.
//!
//! A definition is written in the loose `{id, label, href?, subItems?}`
//! shape and converted once into the tagged [`MenuNode`] form, where a node
//! is either a navigable leaf, an expandable group or an inert label.
//!
//! The row renderer does not own any state. Whoever renders a node keeps its
//! expanded flag and decides whether children are placed below the row.
//!
//! # Quick Example
//!
//! ```no_run
//! use focca_ui_menu::{MenuEntry, MenuRow, MenuTree};
//! use iced::Element;
//! use iced::widget::column;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Toggle(usize),
//!     Navigate(String),
//! }
//!
//! struct State {
//!     tree: MenuTree,
//!     expanded: Vec<bool>,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     let rows = state.tree.roots().iter().enumerate().map(|(index, node)| {
//!         MenuRow::new(node, 0)
//!             .expanded(state.expanded[index])
//!             .on_toggle(Message::Toggle(index))
//!             .on_navigate(|target| Message::Navigate(target.to_owned()))
//!             .view()
//!     });
//!
//!     column(rows).into()
//! }
//!
//! let tree = MenuTree::from_entries(vec![
//!     MenuEntry::link("intro", "Introduction", "/docs"),
//! ]);
//! let state = State { expanded: vec![false; tree.roots().len()], tree };
//! let _ = view(&state);
//! ```

mod model;
mod view;

pub use model::{
    MenuEntry, MenuIssue, MenuNode, MenuPath, MenuTree, RowAction,
    validate_entries,
};
pub use view::MenuRow;
