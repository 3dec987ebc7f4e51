use std::sync::atomic::{AtomicU64, Ordering};

use super::errors::CodeViewerError;

/// One literal snippet with an optional tab title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CodeBlock {
    label: Option<String>,
    code: String,
}

impl CodeBlock {
    pub(crate) fn new(label: &str, code: &str) -> Self {
        Self {
            label: Some(String::from(label)),
            code: String::from(code),
        }
    }

    pub(crate) fn unlabelled(code: &str) -> Self {
        Self {
            label: None,
            code: String::from(code),
        }
    }

    /// Tab title, if it carries any visible text.
    pub(crate) fn label(&self) -> Option<&str> {
        self.label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
    }

    /// Code exactly as it was authored.
    pub(crate) fn code(&self) -> &str {
        &self.code
    }
}

/// Content of a code viewer: one untabbed block or a non-empty tab list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CodeSnippet {
    Single(CodeBlock),
    Tabbed(Vec<CodeBlock>),
}

impl CodeSnippet {
    pub(crate) fn single(code: &str) -> Self {
        Self::Single(CodeBlock::unlabelled(code))
    }

    /// Build a tabbed snippet; an empty block list is rejected.
    pub(crate) fn tabbed(
        blocks: Vec<CodeBlock>,
    ) -> Result<Self, CodeViewerError> {
        if blocks.is_empty() {
            return Err(CodeViewerError::EmptyTabs);
        }
        Ok(Self::Tabbed(blocks))
    }

    /// Blocks in display order, never empty.
    pub(crate) fn blocks(&self) -> &[CodeBlock] {
        match self {
            Self::Single(block) => std::slice::from_ref(block),
            Self::Tabbed(blocks) => blocks,
        }
    }

    /// A tab strip is only drawn when there is something to switch to.
    pub(crate) fn shows_tab_strip(&self) -> bool {
        self.blocks().len() > 1
    }
}

/// Identity of one scheduled copy-feedback reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CopyToken(u64);

impl CopyToken {
    /// Allocate a token that no other viewer instance has seen.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// View model for the code viewer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodeViewerViewModel<'a> {
    pub(crate) blocks: &'a [CodeBlock],
    pub(crate) active_tab: usize,
    pub(crate) copied: bool,
    pub(crate) shows_tab_strip: bool,
}

impl<'a> CodeViewerViewModel<'a> {
    /// Code of the active block.
    pub(crate) fn code(&self) -> &'a str {
        self.blocks
            .get(self.active_tab)
            .map(CodeBlock::code)
            .unwrap_or_default()
    }
}
