use std::rc::Rc;
use std::time::Instant;

use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::state::geometry::PixelPoint;
use crate::state::input::{KeyCode, KeyInput, PointerButton, PointerInput};
use crate::state::layout;
use crate::state::page_state::PageState;
use crate::state::scroll::ScrollTracker;
use crate::state::selection::Mode;
use crate::ui::actions;
use crate::ui::cell::CellView;
use crate::ui::insertion_input::InsertionInput;
use crate::ui::selection::SelectionOverlay;

#[component]
pub fn Page(mut page: Signal<PageState>) -> Element {
    let mut scroll = use_signal(ScrollTracker::new);
    let mut page_element = use_signal::<Option<Rc<MountedData>>>(|| None);

    // Leaving insert mode unmounts the focused input; hand focus back to the page.
    let current_mode = use_memo(move || page.read().mode());
    use_effect(move || {
        if current_mode() == Mode::Select {
            spawn(actions::focus(page_element.peek().clone()));
        }
    });

    let snapshot = page.read().clone();
    let config = snapshot.config().clone();
    let screen_offset = snapshot.screen_offset();
    let mode = snapshot.mode();
    let cells: Vec<_> = snapshot
        .cells()
        .iter()
        .map(|(id, cell)| (id.to_string(), cell.clone(), snapshot.is_highlighted(id)))
        .collect();

    rsx! {
        div {
            class: "page",
            id: "page",
            tabindex: "0",
            style: layout::grid_style(&config, screen_offset),
            onmounted: move |evt| {
                let element = evt.data();
                page_element.set(Some(element.clone()));
                actions::focus(Some(element))
            },
            onmousedown: move |evt| {
                let position = evt.client_coordinates();
                let input = PointerInput {
                    position: PixelPoint::new(position.x, position.y),
                    button: pointer_button(evt.trigger_button()),
                    at: Instant::now(),
                };
                page.with_mut(|state| state.pointer_down(input));
            },
            onmousemove: move |evt| {
                let position = evt.client_coordinates();
                page.with_mut(|state| state.pointer_move(PixelPoint::new(position.x, position.y)));
            },
            onmouseup: move |_| page.with_mut(|state| state.pointer_up()),
            onmouseleave: move |_| page.with_mut(|state| state.pointer_leave()),
            onwheel: move |evt| {
                let delta = evt.delta().strip_units();
                let raw = scroll.with_mut(|tracker| tracker.scroll_by(delta.x, delta.y));
                page.with_mut(|state| state.set_scroll_offset(raw));
            },
            onkeydown: move |evt| {
                let modifiers = evt.modifiers();
                let input = KeyInput {
                    key: KeyCode::from_name(&evt.key().to_string()),
                    shift: modifiers.shift(),
                    ctrl: modifiers.ctrl(),
                };
                let before = page.read().mode();
                let handled = page.with_mut(|state| state.key_down(&input));
                if handled && before == Mode::Select {
                    evt.prevent_default();
                }
            },

            for (id, cell, highlighted) in cells {
                CellView {
                    key: "{id}",
                    id: id.clone(),
                    cell,
                    highlighted,
                    config: config.clone(),
                    screen_offset,
                }
            }

            SelectionOverlay {
                mode,
                bounds: snapshot.bounds(),
                cursor: snapshot.cursor(),
                config: config.clone(),
                screen_offset,
            }

            if mode == Mode::Insert {
                InsertionInput { page }
            }
        }
    }
}

fn pointer_button(button: Option<MouseButton>) -> PointerButton {
    match button {
        Some(MouseButton::Primary) => PointerButton::Primary,
        Some(MouseButton::Secondary) => PointerButton::Secondary,
        Some(MouseButton::Auxiliary) => PointerButton::Auxiliary,
        _ => PointerButton::Other,
    }
}
