//! Thin web-sys glue shared by the behaviours.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList};

/// Collects a static `NodeList` into elements, skipping non-element nodes.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Registers `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Sets `class` on exactly `active` among `links`.
pub fn mark_only(links: &[Element], active: &Element, class: &str) {
    for link in links {
        let _ = link.class_list().remove_1(class);
    }
    let _ = active.class_list().add_1(class);
}
