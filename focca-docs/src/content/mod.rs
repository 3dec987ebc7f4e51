//! Static documentation pages and the built-in navigation menu.

pub(crate) mod catalog;
mod menu;

pub(crate) use menu::default_menu;

use crate::widgets::code_viewer::{CodeBlock, CodeSnippet, CodeViewerError};

/// Heading rank below the page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadingLevel {
    Section,
    Subsection,
}

/// One bullet, optionally led by a bold term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bullet {
    pub(crate) term: Option<String>,
    pub(crate) text: String,
}

/// In-site link rendered as a pressable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageLink {
    pub(crate) label: String,
    pub(crate) target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentBlock {
    Heading { level: HeadingLevel, text: String },
    Paragraph(String),
    Callout(String),
    Bullets(Vec<Bullet>),
    Links(Vec<PageLink>),
    Code(CodeSnippet),
}

/// A rendered documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Page {
    title: String,
    blocks: Vec<ContentBlock>,
}

impl Page {
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: String::from(title),
            blocks: Vec::new(),
        }
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Code snippets in page order.
    pub(crate) fn snippets(&self) -> impl Iterator<Item = &CodeSnippet> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Code(snippet) => Some(snippet),
            _ => None,
        })
    }

    /// Every link target on the page in page order.
    #[cfg(test)]
    pub(crate) fn link_targets(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Links(links) => Some(links),
                _ => None,
            })
            .flatten()
            .map(|link| link.target.as_str())
    }

    pub(crate) fn section(self, text: &str) -> Self {
        self.push(ContentBlock::Heading {
            level: HeadingLevel::Section,
            text: String::from(text),
        })
    }

    pub(crate) fn subsection(self, text: &str) -> Self {
        self.push(ContentBlock::Heading {
            level: HeadingLevel::Subsection,
            text: String::from(text),
        })
    }

    pub(crate) fn paragraph(self, text: &str) -> Self {
        self.push(ContentBlock::Paragraph(String::from(text)))
    }

    pub(crate) fn callout(self, text: &str) -> Self {
        self.push(ContentBlock::Callout(String::from(text)))
    }

    pub(crate) fn bullets<'a>(
        self,
        items: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let bullets = items
            .into_iter()
            .map(|text| Bullet {
                term: None,
                text: String::from(text),
            })
            .collect();
        self.push(ContentBlock::Bullets(bullets))
    }

    /// Bullets led by a bold term, e.g. `host: The address of ...`.
    pub(crate) fn terms<'a>(
        self,
        items: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let bullets = items
            .into_iter()
            .map(|(term, text)| Bullet {
                term: Some(String::from(term)),
                text: String::from(text),
            })
            .collect();
        self.push(ContentBlock::Bullets(bullets))
    }

    pub(crate) fn links<'a>(
        self,
        items: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let links = items
            .into_iter()
            .map(|(label, target)| PageLink {
                label: String::from(label),
                target: String::from(target),
            })
            .collect();
        self.push(ContentBlock::Links(links))
    }

    pub(crate) fn link(self, label: &str, target: &str) -> Self {
        self.links([(label, target)])
    }

    /// Untabbed snippet without a label, kept exactly as written.
    pub(crate) fn code(self, code: &str) -> Self {
        self.push(ContentBlock::Code(CodeSnippet::single(code)))
    }

    /// Labelled snippets; a single tab renders without a tab strip.
    pub(crate) fn tabs<'a>(
        self,
        tabs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        match tabbed(tabs) {
            Ok(snippet) => self.push(ContentBlock::Code(snippet)),
            Err(err) => {
                log::warn!("skipped code snippet on {:?}: {err}", self.title);
                self
            },
        }
    }

    fn push(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }
}

fn tabbed<'a>(
    tabs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<CodeSnippet, CodeViewerError> {
    let blocks = tabs
        .into_iter()
        .map(|(label, code)| CodeBlock::new(label, code))
        .collect();
    CodeSnippet::tabbed(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_builder_calls_when_page_built_then_blocks_keep_call_order() {
        let page = Page::new("Install")
            .section("Step 1")
            .paragraph("Run:")
            .tabs([("npm", "npm install focca"), ("yarn", "yarn add focca")])
            .link("here", "/docs/configuration");

        assert_eq!(page.title(), "Install");
        assert_eq!(page.blocks().len(), 4);
        assert!(matches!(
            page.blocks()[0],
            ContentBlock::Heading {
                level: HeadingLevel::Section,
                ..
            }
        ));
        assert_eq!(page.snippets().count(), 1);
        assert_eq!(
            page.link_targets().collect::<Vec<_>>(),
            vec!["/docs/configuration"]
        );
    }

    #[test]
    fn given_empty_tab_list_when_page_built_then_snippet_is_skipped() {
        let page = Page::new("Empty").tabs(Vec::<(&str, &str)>::new());

        assert!(page.blocks().is_empty());
    }

    #[test]
    fn given_source_with_outer_blank_lines_when_code_added_then_text_is_verbatim()
     {
        let source = "\n  let a = 1;\n  let b = 2;\n";
        let page = Page::new("Code")
            .code(source)
            .tabs([("npm", "\nnpm install focca\n")]);

        let mut snippets = page.snippets();
        let single = snippets.next().expect("untabbed snippet");
        assert_eq!(single.blocks()[0].code(), source);
        let tabbed = snippets.next().expect("tabbed snippet");
        assert_eq!(tabbed.blocks()[0].code(), "\nnpm install focca\n");
    }
}
