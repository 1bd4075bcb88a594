use std::time::Duration;

use dioxus::prelude::*;
use log::warn;

use crate::state::page_state::PageState;

const MEASURE_TIMEOUT: Duration = Duration::from_millis(250);

const MEASURE_SCRIPT: &str = r#"
    const [text, font] = await dioxus.recv();
    const canvas = window.__gridpageMeasure || (window.__gridpageMeasure = document.createElement("canvas"));
    const context = canvas.getContext("2d");
    if (context) {
        context.font = font;
        dioxus.send(context.measureText(text).width);
    } else {
        dioxus.send(null);
    }
"#;

/// Measures `text` in the webview with the given CSS font.
/// Any failure yields `None`, which the page treats as zero width.
pub async fn measure_text(text: &str, font: &str) -> Option<f64> {
    let mut eval = document::eval(MEASURE_SCRIPT);
    if let Err(err) = eval.send((text, font)) {
        warn!("text measurement unavailable: {err:?}");
        return None;
    }

    match tokio::time::timeout(MEASURE_TIMEOUT, eval.recv::<Option<f64>>()).await {
        Ok(Ok(width)) => width,
        Ok(Err(err)) => {
            warn!("text measurement failed: {err:?}");
            None
        }
        Err(_) => {
            warn!("text measurement timed out");
            None
        }
    }
}

/// Measures the pending insert text and grows or shrinks the insert span.
/// Input the page queued meanwhile is replayed once the width lands.
pub async fn resize_insert_span(mut page: Signal<PageState>, text: String) {
    let font = page.read().config().font();
    let width = measure_text(&text, &font).await;
    page.with_mut(|state| {
        state.fit_insert_span(&text, width);
    });
}

pub async fn focus(element: Option<std::rc::Rc<MountedData>>) {
    if let Some(element) = element {
        if let Err(err) = element.set_focus(true).await {
            warn!("could not focus page: {err:?}");
        }
    }
}
