use crate::content::ContentBlock;
use crate::widgets::code_viewer::CodeViewerViewModel;

/// View model for the page content region.
#[derive(Debug, Clone)]
pub(crate) struct ContentViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) blocks: &'a [ContentBlock],
    /// One entry per code block, in page order.
    pub(crate) viewers: Vec<CodeViewerViewModel<'a>>,
}
