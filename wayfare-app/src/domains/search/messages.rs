use wayfare_core::search::Highlight;
use wayfare_model::Tag;

#[derive(Debug, Clone)]
pub enum SearchMessage {
    QueryChanged(String),
    /// Backspace pressed with nothing typed: drop the last chip.
    BackspaceOnEmpty,
    Accept,
    Choose(Tag),
    Remove(Tag),
    MoveHighlight(Highlight),
    Clear,
}

impl SearchMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "Search::QueryChanged",
            Self::BackspaceOnEmpty => "Search::BackspaceOnEmpty",
            Self::Accept => "Search::Accept",
            Self::Choose(_) => "Search::Choose",
            Self::Remove(_) => "Search::Remove",
            Self::MoveHighlight(_) => "Search::MoveHighlight",
            Self::Clear => "Search::Clear",
        }
    }
}
