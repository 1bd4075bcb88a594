use serde::{Deserialize, Serialize};

/// Integer position on the grid, in cell units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn delta_to(self, other: GridPoint) -> (i64, i64) {
        (other.x - self.x, other.y - self.y)
    }
}

/// Position in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
        }
    }
}

/// Inclusive rectangle on the grid, always normalized so that
/// `left <= right` and `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl GridRect {
    pub fn from_corners(a: GridPoint, b: GridPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn top_left(&self) -> GridPoint {
        GridPoint::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> GridPoint {
        GridPoint::new(self.right, self.bottom)
    }

    pub fn width(&self) -> i64 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top + 1
    }

    pub fn contains_point(&self, point: GridPoint) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    pub fn contains_rect(&self, other: &GridRect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }
}

/// Maps a pixel position to the grid cell under it.
///
/// Each axis is floor-divided independently, so a pixel exactly on a cell
/// boundary belongs to the cell to its right (or below).
pub fn to_grid(pixel: PixelPoint, screen_offset: PixelPoint, grid: GridSize) -> GridPoint {
    GridPoint {
        x: floor_div(pixel.x - screen_offset.x, grid.width),
        y: floor_div(pixel.y - screen_offset.y, grid.height),
    }
}

/// Pixel position of a grid point's top-left corner.
pub fn to_pixel(point: GridPoint, screen_offset: PixelPoint, grid: GridSize) -> PixelPoint {
    PixelPoint {
        x: point.x as f64 * f64::from(grid.width) + screen_offset.x,
        y: point.y as f64 * f64::from(grid.height) + screen_offset.y,
    }
}

/// Rounds a raw scroll offset to the nearest whole cell on each axis.
pub fn snap_offset(raw: PixelPoint, grid: GridSize) -> PixelPoint {
    PixelPoint {
        x: snap_axis(raw.x, grid.width),
        y: snap_axis(raw.y, grid.height),
    }
}

fn floor_div(value: f64, cell: u32) -> i64 {
    let cell = f64::from(cell.max(1));
    (value / cell).floor() as i64
}

fn snap_axis(value: f64, cell: u32) -> f64 {
    let cell = f64::from(cell.max(1));
    (value / cell).round() * cell
}
