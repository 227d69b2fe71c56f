//! Editor contract
//!
//! Rich-text editing is an external widget behind a narrow contract:
//! initialize, read content, replace content, dispose. [`EditorSession`]
//! enforces the lifecycle around any implementation so callers cannot read
//! from an editor that was never set up or has already been torn down.

use thiserror::Error;
use tracing::debug;

/// Lifecycle violations and content rejections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Read or write before [`EditorSession::initialize`].
    #[error("editor has not been initialized")]
    NotInitialized,
    /// Second call to [`EditorSession::initialize`].
    #[error("editor is already initialized")]
    AlreadyInitialized,
    /// The session was torn down.
    #[error("editor has been disposed")]
    Disposed,
    /// Content exceeds the character limit.
    #[error("content is {len} characters, the limit is {max}")]
    TooLong {
        /// Characters submitted.
        len: usize,
        /// Configured limit.
        max: usize,
    },
    /// The editor implementation reported a failure.
    #[error("editor backend failed: {0}")]
    Backend(String),
}

/// The narrow surface an external editor widget must provide.
#[cfg_attr(test, mockall::automock)]
pub trait RichTextEditor {
    /// Load `initial` and get ready for input.
    fn initialize(&mut self, initial: &str) -> Result<(), EditorError>;
    /// Current text.
    fn content(&self) -> String;
    /// Replace the whole text.
    fn set_content(&mut self, content: &str) -> Result<(), EditorError>;
    /// Release whatever the widget holds. Called at most once.
    fn dispose(&mut self);
}

/// In-memory editor used by the compose box.
#[derive(Debug, Clone, Default)]
pub struct PlainTextEditor {
    buffer: String,
}

impl RichTextEditor for PlainTextEditor {
    fn initialize(&mut self, initial: &str) -> Result<(), EditorError> {
        self.buffer = initial.to_string();
        Ok(())
    }

    fn content(&self) -> String {
        self.buffer.clone()
    }

    fn set_content(&mut self, content: &str) -> Result<(), EditorError> {
        self.buffer.clear();
        self.buffer.push_str(content);
        Ok(())
    }

    fn dispose(&mut self) {
        self.buffer.clear();
    }
}

/// Where an [`EditorSession`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but not yet initialized.
    Uninitialized,
    /// Initialized and accepting reads and writes.
    Ready,
    /// Torn down. Nothing is accepted any more.
    Disposed,
}

/// Lifecycle guard around a [`RichTextEditor`] with a character limit.
#[derive(Debug)]
pub struct EditorSession<E: RichTextEditor> {
    editor: E,
    lifecycle: Lifecycle,
    max_chars: usize,
}

impl<E: RichTextEditor> EditorSession<E> {
    /// Wrap `editor`. Nothing is initialized until [`Self::initialize`].
    pub fn new(editor: E, max_chars: usize) -> Self {
        Self {
            editor,
            lifecycle: Lifecycle::Uninitialized,
            max_chars,
        }
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether reads and writes are accepted.
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Character limit for content.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Initialize the backend with `initial`. Fails when already initialized
    /// or disposed, or when `initial` is over the limit.
    pub fn initialize(&mut self, initial: &str) -> Result<(), EditorError> {
        match self.lifecycle {
            Lifecycle::Ready => return Err(EditorError::AlreadyInitialized),
            Lifecycle::Disposed => return Err(EditorError::Disposed),
            Lifecycle::Uninitialized => {}
        }
        self.check_len(initial)?;
        self.editor.initialize(initial)?;
        self.lifecycle = Lifecycle::Ready;
        debug!("editor session initialized");
        Ok(())
    }

    /// Current text, or an error outside the ready state.
    pub fn content(&self) -> Result<String, EditorError> {
        self.ensure_ready()?;
        Ok(self.editor.content())
    }

    /// Replace the text, rejecting anything over the limit.
    pub fn set_content(&mut self, content: &str) -> Result<(), EditorError> {
        self.ensure_ready()?;
        self.check_len(content)?;
        self.editor.set_content(content)
    }

    /// Character count of the current content, zero when not ready.
    pub fn char_count(&self) -> usize {
        self.content().map(|c| c.chars().count()).unwrap_or(0)
    }

    /// Read the content and reset the editor to empty, e.g. after publishing.
    pub fn take_content(&mut self) -> Result<String, EditorError> {
        let content = self.content()?;
        self.editor.set_content("")?;
        Ok(content)
    }

    /// Release the backend. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        if self.lifecycle == Lifecycle::Ready {
            self.editor.dispose();
        }
        self.lifecycle = Lifecycle::Disposed;
        debug!("editor session disposed");
    }

    fn ensure_ready(&self) -> Result<(), EditorError> {
        match self.lifecycle {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Uninitialized => Err(EditorError::NotInitialized),
            Lifecycle::Disposed => Err(EditorError::Disposed),
        }
    }

    fn check_len(&self, content: &str) -> Result<(), EditorError> {
        let len = content.chars().count();
        if len > self.max_chars {
            return Err(EditorError::TooLong {
                len,
                max: self.max_chars,
            });
        }
        Ok(())
    }
}

impl<E: RichTextEditor> Drop for EditorSession<E> {
    fn drop(&mut self) {
        self.dispose();
    }
}
