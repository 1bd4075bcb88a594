use crate::state::geometry::PixelPoint;

/// Accumulates pan gestures into a raw pixel offset.
///
/// The page snaps this offset to whole cells before mapping pointer
/// positions, see [`crate::state::page_state::PageState::set_scroll_offset`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    raw: PixelPoint,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> PixelPoint {
        self.raw
    }

    /// Applies a wheel delta. Scrolling down or right moves the content up or left.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) -> PixelPoint {
        if dx.is_finite() {
            self.raw.x -= dx;
        }
        if dy.is_finite() {
            self.raw.y -= dy;
        }
        self.raw
    }
}
