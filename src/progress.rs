use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::dom;
use crate::error::BehaviorResult;

const LONG_FORM_CLASS: &str = "project-page";

/// Percentage of the page scrolled past, 0 when nothing can scroll.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn init(window: &Window, document: &Document) -> BehaviorResult {
    let Some(body) = document.body() else {
        return Ok(());
    };
    if !body.class_list().contains(LONG_FORM_CLASS) {
        return Ok(());
    }

    let bar: HtmlElement = document.create_element("div")?.unchecked_into();
    bar.set_class_name("scroll-progress");
    body.append_child(&bar)?;

    let update = {
        let window = window.clone();
        let document = document.clone();
        move || {
            let scroll_top = window.scroll_y().unwrap_or(0.0);
            let scroll_height = document
                .document_element()
                .map_or(0.0, |root| f64::from(root.scroll_height()));
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let percent = scroll_percent(scroll_top, scroll_height, viewport);
            let _ = bar.style().set_property("width", &format!("{percent}%"));
        }
    };

    update();
    dom::listen(window, "scroll", move |_| update())?;
    Ok(())
}
