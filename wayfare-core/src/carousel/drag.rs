//! Pointer drag tracking for the carousel viewport

/// An in-progress horizontal drag. Positions are in viewport coordinates;
/// only the difference between them matters. The offset the content had at
/// the press is kept so the content moves from where it was, even when the
/// press interrupted a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    origin_x: f32,
    current_x: f32,
    base_offset: f32,
}

impl DragGesture {
    /// Press at `x` while the content sits at `base_offset`.
    pub fn begin(x: f32, base_offset: f32) -> Self {
        Self {
            origin_x: x,
            current_x: x,
            base_offset,
        }
    }

    /// Pointer moved to `x`.
    pub fn move_to(&mut self, x: f32) {
        self.current_x = x;
    }

    /// Offset the content had when the drag began.
    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    /// Unclamped offset under the pointer: base plus travel.
    pub fn raw_offset(&self) -> f32 {
        self.base_offset + self.delta()
    }

    /// Signed horizontal travel since the press. Negative means the pointer
    /// moved left, which pulls later items into view.
    pub fn delta(&self) -> f32 {
        self.current_x - self.origin_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_tracks_latest_position() {
        let mut drag = DragGesture::begin(200.0, 0.0);
        assert_eq!(drag.delta(), 0.0);
        drag.move_to(120.0);
        assert_eq!(drag.delta(), -80.0);
        drag.move_to(260.0);
        assert_eq!(drag.delta(), 60.0);
    }

    #[test]
    fn raw_offset_starts_from_the_base() {
        let mut drag = DragGesture::begin(500.0, -108.0);
        assert_eq!(drag.raw_offset(), -108.0);
        drag.move_to(499.0);
        assert_eq!(drag.raw_offset(), -109.0);
        assert_eq!(drag.base_offset(), -108.0);
    }
}
