//! Throw-away page markup for the browser tests.

use web_sys::{Document, Element, Window};

pub struct Fixture {
    pub window: Window,
    pub document: Document,
    pub root: Element,
}

impl Fixture {
    /// Appends `html` to `body` inside a fresh wrapper.
    pub fn mount(html: &str) -> Self {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self {
            window,
            document,
            root,
        }
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.document
            .query_selector_all(selector)
            .unwrap()
            .length()
    }

    pub fn get(&self, selector: &str) -> Element {
        self.root.query_selector(selector).unwrap().unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}
