use crate::content::Page;
use crate::widgets::code_viewer::CodeViewerWidget;

/// Mounted page plus one code viewer per code block.
pub(super) struct ContentState {
    page: Page,
    viewers: Vec<CodeViewerWidget>,
}

impl ContentState {
    pub(super) fn mount(page: Page) -> Self {
        let viewers = page
            .snippets()
            .cloned()
            .map(CodeViewerWidget::new)
            .collect();

        Self { page, viewers }
    }

    pub(super) fn page(&self) -> &Page {
        &self.page
    }

    pub(super) fn viewers(&self) -> &[CodeViewerWidget] {
        &self.viewers
    }

    pub(super) fn viewer_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut CodeViewerWidget> {
        self.viewers.get_mut(index)
    }

    pub(super) fn teardown(&mut self) {
        for viewer in &mut self.viewers {
            viewer.teardown();
        }
    }
}
