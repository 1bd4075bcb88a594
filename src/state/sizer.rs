use crate::state::geometry::GridPoint;

/// Turns a measurement into a usable width; failures and garbage read as zero.
pub fn sanitize_width(width: Option<f64>) -> f64 {
    match width {
        Some(width) if width.is_finite() && width > 0.0 => width,
        _ => 0.0,
    }
}

/// Whole cells the insert span extends past its anchor for `text_width` pixels.
pub fn extra_cells(text_width: f64, padding: f64, cell_width: u32) -> i64 {
    let cell_width = f64::from(cell_width.max(1));
    let cells = ((text_width + padding) / cell_width).floor();
    if cells.is_finite() {
        cells.max(0.0) as i64
    } else {
        0
    }
}

/// End corner of the insert span anchored at `start`.
pub fn span_end(start: GridPoint, text_width: f64, padding: f64, cell_width: u32) -> GridPoint {
    GridPoint::new(start.x + extra_cells(text_width, padding, cell_width), start.y)
}
