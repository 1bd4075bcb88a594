use crate::state::geometry::{GridPoint, GridRect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Select,
    Insert,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
        }
    }
}

/// Two corners of the selected area. The corners are kept as given; use
/// [`Selection::bounds`] for the normalized rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl Selection {
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    pub fn point(point: GridPoint) -> Self {
        Self::new(point, point)
    }

    pub fn set(&mut self, start: GridPoint, end: GridPoint) {
        self.start = start;
        self.end = end;
    }

    pub fn collapse_to(&mut self, point: GridPoint) {
        self.set(point, point);
    }

    pub fn snap_to(&mut self, rect: GridRect) {
        self.set(rect.top_left(), rect.bottom_right());
    }

    pub fn shift(&mut self, dx: i64, dy: i64) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    pub fn bounds(&self) -> GridRect {
        GridRect::from_corners(self.start, self.end)
    }

    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}
