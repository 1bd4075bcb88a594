use gridpage::state::cell_store::{Cell, CellSize};
use gridpage::state::config::PageConfig;
use gridpage::state::geometry::{GridPoint, GridRect, PixelPoint};
use gridpage::state::layout::{self, PixelRect};
use gridpage::state::selection::Mode;

fn bounds(left: i64, top: i64, right: i64, bottom: i64) -> GridRect {
    GridRect {
        left,
        top,
        right,
        bottom,
    }
}

#[test]
fn test_cell_rect_includes_border_pixel() {
    let config = PageConfig::default();
    let cell = Cell::new(GridPoint::new(2, 1), CellSize::new(3, 2), "x");

    let rect = layout::cell_rect(&cell, &config, PixelPoint::new(24.0, 0.0));

    assert_eq!(
        rect,
        PixelRect {
            left: 72.0,
            top: 24.0,
            width: 73.0,
            height: 49.0
        }
    );
}

#[test]
fn test_frame_rect_wraps_bounds() {
    let config = PageConfig::default();
    let rect = layout::frame_rect(bounds(1, 1, 2, 3), &config, PixelPoint::default());

    assert_eq!(
        rect,
        PixelRect {
            left: 23.0,
            top: 23.0,
            width: 51.0,
            height: 75.0
        }
    );
}

#[test]
fn test_cursor_rect_sits_inside_cell() {
    let config = PageConfig::with_grid_size(20, 30);
    let rect = layout::cursor_rect(GridPoint::new(1, 1), &config, PixelPoint::default());

    assert_eq!(
        rect,
        PixelRect {
            left: 21.0,
            top: 31.0,
            width: 19.0,
            height: 29.0
        }
    );
}

#[test]
fn test_frame_style_depends_on_mode() {
    let config = PageConfig::default();
    let select = layout::frame_style(Mode::Select, bounds(0, 0, 0, 0), &config, PixelPoint::default());
    let insert = layout::frame_style(Mode::Insert, bounds(0, 0, 0, 0), &config, PixelPoint::default());

    assert!(select.contains("border-color: #60a5fa"));
    assert!(insert.contains("border-color: #9ca3af"));
    assert!(select.starts_with("left: -1px; top: -1px; width: 27px; height: 27px;"));
}

#[test]
fn test_grid_style_tracks_offset() {
    let config = PageConfig::default();
    let style = layout::grid_style(&config, PixelPoint::new(48.0, -24.0));

    assert_eq!(
        style,
        "background-size: 24px 24px; background-position: 48px -24px;"
    );
}

#[test]
fn test_cell_style_uses_config_font() {
    let config = PageConfig::default();
    let cell = Cell::new(GridPoint::new(0, 0), CellSize::new(1, 1), "x");

    let style = layout::cell_style(&cell, &config, PixelPoint::default());

    assert!(style.ends_with("font: 16.8px sans-serif;"));
}
