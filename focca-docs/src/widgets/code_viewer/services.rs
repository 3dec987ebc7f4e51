#[cfg(test)]
use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

use clipboard_rs::{Clipboard, ClipboardContext};

use super::errors::ClipboardError;
use super::model::CopyToken;

/// How long the copied indicator stays on after a successful copy.
pub(crate) const COPY_FEEDBACK_MS: u64 = 2000;

/// Text sink for the copy button.
pub(crate) trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Text write access to a platform clipboard connection.
pub(crate) trait ClipboardBackend {
    fn set_text(&self, text: String) -> Result<(), String>;
}

impl ClipboardBackend for ClipboardContext {
    fn set_text(&self, text: String) -> Result<(), String> {
        Clipboard::set_text(self, text).map_err(|err| err.to_string())
    }
}

/// Clipboard of the host system.
///
/// The connection is opened once and reused for every write; a failed
/// connection makes every write report [`ClipboardError::Unavailable`].
pub(crate) struct SystemClipboard<B = ClipboardContext> {
    backend: Result<B, String>,
}

impl SystemClipboard {
    pub(crate) fn connect() -> Self {
        Self::connect_with(ClipboardContext::new)
    }
}

impl<B: ClipboardBackend> SystemClipboard<B> {
    fn connect_with<E: fmt::Display>(
        connect: impl FnOnce() -> Result<B, E>,
    ) -> Self {
        let backend = connect().map_err(|err| err.to_string());
        if let Err(err) = &backend {
            log::warn!("system clipboard unavailable: {err}");
        }
        Self { backend }
    }
}

impl<B: ClipboardBackend> ClipboardWriter for SystemClipboard<B> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let backend = self
            .backend
            .as_ref()
            .map_err(|err| ClipboardError::Unavailable(err.clone()))?;

        backend
            .set_text(text.to_owned())
            .map_err(ClipboardError::WriteFailed)
    }
}

/// Resolve with `token` once the feedback period is over.
pub(crate) async fn feedback_elapsed(token: CopyToken) -> CopyToken {
    tokio::time::sleep(Duration::from_millis(COPY_FEEDBACK_MS)).await;
    token
}

/// In-memory clipboard that records writes or refuses them.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct FakeClipboard {
    denied: bool,
    written: RefCell<Vec<String>>,
}

#[cfg(test)]
impl FakeClipboard {
    pub(crate) fn denied() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    pub(crate) fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

#[cfg(test)]
impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::WriteFailed(String::from(
                "permission denied",
            )));
        }
        self.written.borrow_mut().push(String::from(text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::{ClipboardBackend, ClipboardWriter, SystemClipboard};
    use crate::widgets::code_viewer::errors::ClipboardError;

    #[derive(Default)]
    struct RecordingBackend {
        written: RefCell<Vec<String>>,
    }

    impl ClipboardBackend for RecordingBackend {
        fn set_text(&self, text: String) -> Result<(), String> {
            self.written.borrow_mut().push(text);
            Ok(())
        }
    }

    #[test]
    fn given_connected_clipboard_when_written_twice_then_connection_is_reused()
    {
        let connects = Cell::new(0);
        let clipboard = SystemClipboard::connect_with(|| {
            connects.set(connects.get() + 1);
            Ok::<_, String>(RecordingBackend::default())
        });

        clipboard
            .write_text("npm install focca")
            .expect("first write should succeed");
        clipboard
            .write_text("yarn add focca")
            .expect("second write should succeed");

        assert_eq!(connects.get(), 1);
        let backend = clipboard.backend.as_ref().expect("backend connected");
        assert_eq!(
            *backend.written.borrow(),
            vec![String::from("npm install focca"), String::from("yarn add focca")]
        );
    }

    #[test]
    fn given_failed_connection_when_written_then_clipboard_is_unavailable() {
        let connects = Cell::new(0);
        let clipboard = SystemClipboard::<RecordingBackend>::connect_with(|| {
            connects.set(connects.get() + 1);
            Err("no display")
        });

        for _ in 0..2 {
            assert!(matches!(
                clipboard.write_text("npm install focca"),
                Err(ClipboardError::Unavailable(_))
            ));
        }
        assert_eq!(connects.get(), 1);
    }
}
