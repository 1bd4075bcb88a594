use std::time::{Duration, Instant};

use gridpage::io::config_io;
use gridpage::state::geometry::{GridPoint, GridRect, PixelPoint};
use gridpage::state::input::{KeyInput, PointerInput};
use gridpage::state::page_state::{DragState, PageState};
use gridpage::state::selection::Mode;

fn load_fixture_state() -> PageState {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests").join("data").join("page.json");
    PageState::new(config_io::load_config(&path).unwrap())
}

#[test_log::test]
fn test_e2e_scroll_write_move_delete() {
    let mut state = load_fixture_state();
    let t0 = Instant::now();

    // Pan by a bit more than one cell; the offset snaps to 20px.
    state.set_scroll_offset(PixelPoint::new(-27.0, 0.0));
    assert_eq!(state.screen_offset(), PixelPoint::new(-20.0, 0.0));

    // Grid (2, 1) sits at pixel (2 * 20 - 20, 20).
    let at_2_1 = PixelPoint::new(25.0, 25.0);
    assert_eq!(state.grid_point_at(at_2_1), GridPoint::new(2, 1));

    state.pointer_down(PointerInput::primary(at_2_1, t0));
    state.pointer_up();
    state.pointer_down(PointerInput::primary(at_2_1, t0 + Duration::from_millis(120)));
    state.pointer_up();
    assert_eq!(state.mode(), Mode::Insert);

    // Enter lands before the width does; the commit waits for it.
    assert!(state.set_insert_text("note"));
    assert!(state.key_down(&KeyInput::named("Enter")));
    assert!(state.cells().is_empty());
    assert!(state.fit_insert_span("note", Some(40.0)));
    let note = state.cells().get("apple").unwrap().clone();
    assert_eq!(
        note.bounds(),
        GridRect {
            left: 2,
            top: 1,
            right: 4,
            bottom: 1
        }
    );

    // Drag the new cell two cells down by its middle.
    let middle = PixelPoint::new(45.0, 25.0);
    state.pointer_down(PointerInput::primary(middle, t0 + Duration::from_secs(1)));
    assert!(matches!(state.drag(), DragState::CellMove { .. }));
    state.pointer_move(PixelPoint::new(45.0, 65.0));
    state.pointer_up();
    assert_eq!(state.cells().get("apple").unwrap().pos, GridPoint::new(2, 3));
    assert_eq!(state.cursor(), GridPoint::new(3, 3));

    // Nudge it back up with ctrl+k, then delete it.
    state.key_down(&KeyInput::named("k").with_ctrl());
    assert_eq!(state.cells().get("apple").unwrap().pos, GridPoint::new(2, 2));
    assert!(state.key_down(&KeyInput::named("Delete")));
    assert!(state.cells().is_empty());
}
