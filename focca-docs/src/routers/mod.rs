pub(crate) mod chrome;
pub(crate) mod content;
pub(crate) mod navigation;
pub(crate) mod page_shell;
pub(crate) mod sidebar;
pub(crate) mod window;
