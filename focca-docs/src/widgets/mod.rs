pub(crate) mod chrome;
pub(crate) mod code_viewer;
pub(crate) mod content;
pub(crate) mod menu;
pub(crate) mod page_shell;
pub(crate) mod sidebar;
