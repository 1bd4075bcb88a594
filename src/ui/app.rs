use dioxus::prelude::*;

use crate::io::config_io;
use crate::state::page_state::PageState;
use crate::ui::page::Page;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let page = use_signal(|| PageState::new(config_io::load_from_env()));

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Page { page }
        }
    }
}
