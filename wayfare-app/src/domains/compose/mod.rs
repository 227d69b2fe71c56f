//! Compose box for new community posts, backed by an [`EditorSession`].

pub mod messages;
pub mod update;
pub mod view;

use wayfare_core::{EditorSession, PlainTextEditor};

#[derive(Debug)]
pub struct ComposeDomain {
    pub session: EditorSession<PlainTextEditor>,
}

impl ComposeDomain {
    pub fn new(max_chars: usize) -> Self {
        let mut session =
            EditorSession::new(PlainTextEditor::default(), max_chars);
        if let Err(err) = session.initialize("") {
            log::error!("compose editor failed to start: {err}");
        }
        Self { session }
    }

    /// Current draft, empty when the editor is unavailable.
    pub fn draft(&self) -> String {
        self.session.content().unwrap_or_default()
    }
}
