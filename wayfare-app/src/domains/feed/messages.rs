use wayfare_model::PostId;

#[derive(Debug, Clone)]
pub enum FeedMessage {
    ToggleLike(PostId),
    Share(PostId),
    ToggleComments(PostId),
    DraftChanged(PostId, String),
    SubmitComment(PostId),
    Hovered(Option<PostId>),
}

impl FeedMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleLike(_) => "Feed::ToggleLike",
            Self::Share(_) => "Feed::Share",
            Self::ToggleComments(_) => "Feed::ToggleComments",
            Self::DraftChanged(_, _) => "Feed::DraftChanged",
            Self::SubmitComment(_) => "Feed::SubmitComment",
            Self::Hovered(_) => "Feed::Hovered",
        }
    }
}
