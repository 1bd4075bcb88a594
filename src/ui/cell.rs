use dioxus::prelude::*;

use crate::state::cell_store::Cell;
use crate::state::config::PageConfig;
use crate::state::geometry::PixelPoint;
use crate::state::layout;

#[component]
pub fn CellView(
    id: String,
    cell: Cell,
    highlighted: bool,
    config: PageConfig,
    screen_offset: PixelPoint,
) -> Element {
    let style = layout::cell_style(&cell, &config, screen_offset);

    rsx! {
        div { class: "cell", id: "cell-{id}", style: "{style}",
            "{cell.value}"
            if highlighted {
                span { class: "cell-tip", "{id}" }
            }
        }
    }
}
