use crate::widgets::menu::MenuNodeViewModel;

pub(crate) const SIDEBAR_WIDTH: f32 = 256.0;

/// Static link shown in the "Resources" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResourceLink {
    pub(crate) label: &'static str,
    pub(crate) target: &'static str,
}

pub(crate) const RESOURCES: &[ResourceLink] = &[ResourceLink {
    label: "Utils",
    target: "/docs/utils",
}];

/// View model for the sidebar panel.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) menu: Vec<MenuNodeViewModel<'a>>,
    pub(crate) resources: &'static [ResourceLink],
}
