use dioxus::prelude::*;

use crate::state::layout;
use crate::state::page_state::PageState;
use crate::ui::actions;

#[component]
pub fn InsertionInput(mut page: Signal<PageState>) -> Element {
    let (style, value) = {
        let state = page.read();
        (
            layout::insertion_style(state.bounds(), state.config(), state.screen_offset()),
            state.insert_value().to_string(),
        )
    };

    rsx! {
        div { class: "insertion", style: "{style}",
            input {
                class: "insertion-input",
                id: "insertion-input",
                r#type: "text",
                value: "{value}",
                onmounted: move |evt| actions::focus(Some(evt.data())),
                oninput: move |evt| {
                    let text = evt.value();
                    if page.with_mut(|state| state.set_insert_text(text.clone())) {
                        spawn(actions::resize_insert_span(page, text));
                    }
                }
            }
        }
    }
}
