use dioxus::prelude::*;

use crate::state::config::PageConfig;
use crate::state::geometry::{GridPoint, GridRect, PixelPoint};
use crate::state::layout;
use crate::state::selection::Mode;

#[component]
pub fn SelectionOverlay(
    mode: Mode,
    bounds: GridRect,
    cursor: GridPoint,
    config: PageConfig,
    screen_offset: PixelPoint,
) -> Element {
    let frame = layout::frame_style(mode, bounds, &config, screen_offset);
    let cursor_box = layout::cursor_style(cursor, &config, screen_offset);

    rsx! {
        div { class: "selection", id: "selection", style: "{frame}" }
        if mode == Mode::Select {
            div { class: "selection-cursor", id: "selection-cursor", style: "{cursor_box}" }
        }
    }
}
