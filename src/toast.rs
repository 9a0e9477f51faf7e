//! Transient status messages.
//!
//! A toast is appended hidden, gains `show` on the next animation frame,
//! loses it after [`TOAST_VISIBLE_MS`] and is removed [`TOAST_FADE_MS`]
//! later. Each toast runs its own timers; nothing cancels them.

use gloo_timers::callback::Timeout;
use leptos::prelude::request_animation_frame;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::BehaviorError;

pub const TOAST_VISIBLE_MS: u32 = 2_500;
pub const TOAST_FADE_MS: u32 = 200;
const CONTAINER_CLASS: &str = "toast-container";
const SHOW_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the document, entrance class applied.
    Shown,
    /// Entrance class removed, fade-out running.
    Leaving,
    Removed,
}

/// Phase of a toast `elapsed_ms` after it was shown.
pub fn phase_at(elapsed_ms: u32) -> ToastPhase {
    if elapsed_ms < TOAST_VISIBLE_MS {
        ToastPhase::Shown
    } else if elapsed_ms < TOAST_VISIBLE_MS + TOAST_FADE_MS {
        ToastPhase::Leaving
    } else {
        ToastPhase::Removed
    }
}

/// Handle on the page's single toast container.
#[derive(Clone)]
pub struct Toaster {
    document: Document,
    container: Element,
}

impl Toaster {
    /// Finds the container, creating it on first use.
    pub fn ensure(document: &Document) -> Result<Option<Self>, BehaviorError> {
        let selector = format!(".{CONTAINER_CLASS}");
        if let Some(container) = dom::query(document, &selector) {
            return Ok(Some(Self {
                document: document.clone(),
                container,
            }));
        }
        let Some(body) = document.body() else {
            return Ok(None);
        };

        let container = document.create_element("div")?;
        container.set_class_name(CONTAINER_CLASS);
        container.set_attribute("aria-live", "polite")?;
        container.set_attribute("aria-atomic", "true")?;
        body.append_child(&container)?;
        Ok(Some(Self {
            document: document.clone(),
            container,
        }))
    }

    pub fn show(&self, message: &str) {
        if let Err(err) = self.try_show(message) {
            log::warn!("toast: {err}");
        }
    }

    fn try_show(&self, message: &str) -> Result<(), BehaviorError> {
        let toast = self.document.create_element("div")?;
        toast.set_class_name("toast");
        toast.set_attribute("role", "status")?;
        toast.set_text_content(Some(message));
        self.container.append_child(&toast)?;

        let entering = toast.clone();
        request_animation_frame(move || {
            let _ = entering.class_list().add_1(SHOW_CLASS);
        });

        Timeout::new(TOAST_VISIBLE_MS, move || {
            let _ = toast.class_list().remove_1(SHOW_CLASS);
            Timeout::new(TOAST_FADE_MS, move || toast.remove()).forget();
        })
        .forget();
        Ok(())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn container_is_created_once() {
        let document = web_sys::window().unwrap().document().unwrap();
        let first = Toaster::ensure(&document).unwrap().unwrap();
        let second = Toaster::ensure(&document).unwrap().unwrap();

        let containers = document.query_selector_all(".toast-container").unwrap();
        assert_eq!(containers.length(), 1);
        assert_eq!(first.container, second.container);
        assert_eq!(first.container.get_attribute("aria-live").as_deref(), Some("polite"));
        assert_eq!(first.container.get_attribute("aria-atomic").as_deref(), Some("true"));
    }

    #[wasm_bindgen_test]
    fn toast_lands_in_the_container() {
        let document = web_sys::window().unwrap().document().unwrap();
        let toaster = Toaster::ensure(&document).unwrap().unwrap();
        let before = toaster.container.child_element_count();

        toaster.show("Saved");

        assert_eq!(toaster.container.child_element_count(), before + 1);
        let last = toaster.container.last_element_child().unwrap();
        assert_eq!(last.get_attribute("role").as_deref(), Some("status"));
        assert_eq!(last.text_content().as_deref(), Some("Saved"));
    }
}
