#[derive(Debug, Clone)]
pub enum ComposeMessage {
    Edited(String),
    Publish,
}

impl ComposeMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edited(_) => "Compose::Edited",
            Self::Publish => "Compose::Publish",
        }
    }
}
