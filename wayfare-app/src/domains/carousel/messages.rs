use std::time::Instant;

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Next,
    Prev,
    GoTo(usize),
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    /// The scrollable moved on its own (mouse wheel); snap it back.
    Scrolled,
    Frame(Instant),
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Carousel::Next",
            Self::Prev => "Carousel::Prev",
            Self::GoTo(_) => "Carousel::GoTo",
            Self::PointerMoved(_) => "Carousel::PointerMoved",
            Self::PointerPressed => "Carousel::PointerPressed",
            Self::PointerReleased => "Carousel::PointerReleased",
            Self::PointerLeft => "Carousel::PointerLeft",
            Self::Scrolled => "Carousel::Scrolled",
            Self::Frame(_) => "Carousel::Frame",
        }
    }
}
