use gridpage::state::geometry::GridPoint;
use gridpage::state::sizer;

#[test]
fn test_extra_cells_floors_padded_width() {
    assert_eq!(sizer::extra_cells(0.0, 4.0, 24), 0);
    assert_eq!(sizer::extra_cells(19.9, 4.0, 24), 0);
    assert_eq!(sizer::extra_cells(20.0, 4.0, 24), 1);
    assert_eq!(sizer::extra_cells(77.0, 4.0, 24), 3);
}

#[test]
fn test_extra_cells_never_negative() {
    assert_eq!(sizer::extra_cells(-100.0, 4.0, 24), 0);
    assert_eq!(sizer::extra_cells(0.0, -30.0, 24), 0);
    assert_eq!(sizer::extra_cells(f64::NAN, 4.0, 24), 0);
    assert_eq!(sizer::extra_cells(f64::INFINITY, 4.0, 24), 0);
}

#[test]
fn test_span_end_keeps_row() {
    assert_eq!(
        sizer::span_end(GridPoint::new(3, 5), 50.0, 4.0, 24),
        GridPoint::new(5, 5)
    );
}

#[test]
fn test_sanitize_width_degrades_to_zero() {
    assert_eq!(sizer::sanitize_width(None), 0.0);
    assert_eq!(sizer::sanitize_width(Some(-3.0)), 0.0);
    assert_eq!(sizer::sanitize_width(Some(f64::NAN)), 0.0);
    assert_eq!(sizer::sanitize_width(Some(12.5)), 12.5);
}

