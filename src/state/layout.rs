use crate::state::cell_store::Cell;
use crate::state::config::PageConfig;
use crate::state::geometry::{self, GridPoint, GridRect, PixelPoint};
use crate::state::selection::Mode;

/// Border drawn around the selection frame and insertion input.
const FRAME_BORDER: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn inline_style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

pub fn cell_rect(cell: &Cell, config: &PageConfig, screen_offset: PixelPoint) -> PixelRect {
    let origin = geometry::to_pixel(cell.pos, screen_offset, config.grid_size);
    PixelRect {
        left: origin.x,
        top: origin.y,
        width: cell.size.width() as f64 * f64::from(config.grid_size.width) + 1.0,
        height: cell.size.height() as f64 * f64::from(config.grid_size.height) + 1.0,
    }
}

/// Frame around the selection bounds. Shared by the insertion input.
pub fn frame_rect(bounds: GridRect, config: &PageConfig, screen_offset: PixelPoint) -> PixelRect {
    let origin = geometry::to_pixel(bounds.top_left(), screen_offset, config.grid_size);
    PixelRect {
        left: origin.x - 1.0,
        top: origin.y - 1.0,
        width: bounds.width() as f64 * f64::from(config.grid_size.width) + FRAME_BORDER,
        height: bounds.height() as f64 * f64::from(config.grid_size.height) + FRAME_BORDER,
    }
}

pub fn cursor_rect(cursor: GridPoint, config: &PageConfig, screen_offset: PixelPoint) -> PixelRect {
    let origin = geometry::to_pixel(cursor, screen_offset, config.grid_size);
    PixelRect {
        left: origin.x + 1.0,
        top: origin.y + 1.0,
        width: f64::from(config.grid_size.width) - 1.0,
        height: f64::from(config.grid_size.height) - 1.0,
    }
}

pub fn frame_style(
    mode: Mode,
    bounds: GridRect,
    config: &PageConfig,
    screen_offset: PixelPoint,
) -> String {
    let (background, border) = match mode {
        Mode::Select => ("#bfdbfe30", "#60a5fa"),
        Mode::Insert => ("#00000000", "#9ca3af"),
    };
    format!(
        "{} background-color: {background}; border-color: {border}; border-width: {FRAME_BORDER}px;",
        frame_rect(bounds, config, screen_offset).inline_style()
    )
}

pub fn cell_style(cell: &Cell, config: &PageConfig, screen_offset: PixelPoint) -> String {
    format!(
        "{} font: {};",
        cell_rect(cell, config, screen_offset).inline_style(),
        config.font()
    )
}

pub fn cursor_style(cursor: GridPoint, config: &PageConfig, screen_offset: PixelPoint) -> String {
    cursor_rect(cursor, config, screen_offset).inline_style()
}

pub fn insertion_style(bounds: GridRect, config: &PageConfig, screen_offset: PixelPoint) -> String {
    format!(
        "{} border-width: {FRAME_BORDER}px; font: {};",
        frame_rect(bounds, config, screen_offset).inline_style(),
        config.font()
    )
}

/// Background lines for the page, scrolled with the grid.
pub fn grid_style(config: &PageConfig, screen_offset: PixelPoint) -> String {
    format!(
        "background-size: {}px {}px; background-position: {}px {}px;",
        config.grid_size.width, config.grid_size.height, screen_offset.x, screen_offset.y
    )
}
