//! Client-side behaviour for the static portfolio pages.
//!
//! Every page loads the same wasm bundle. Once the document is parsed the
//! behaviours attach in a fixed order; each one checks for its own markup
//! and quietly does nothing when the page does not carry it.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod clipboard;
pub mod config;
pub mod copy_email;
pub mod demo_form;
pub mod dom;
pub mod error;
pub mod filter;
pub mod layout;
pub mod nav;
pub mod progress;
pub mod spy;
pub mod text;
pub mod theme;
pub mod toast;
pub mod toc;

#[cfg(all(test, target_arch = "wasm32"))]
mod fixture;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use config::SiteConfig;
use error::{BehaviorError, BehaviorResult};
use toast::Toaster;

#[wasm_bindgen(start)]
pub fn start() {
    init_runtime();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let mut pending = Some((window.clone(), document.clone()));
        let registered = dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some((window, document)) = pending.take() {
                boot(&window, &document);
            }
        });
        if let Err(err) = registered {
            log::warn!("boot: {}", BehaviorError::from(err));
        }
    } else {
        boot(&window, &document);
    }
}

/// Attaches every behaviour. Order matters: the injected header and footer
/// must exist before the theme toggle and copy buttons are looked up.
pub fn boot(window: &Window, document: &Document) {
    let config = SiteConfig::load(window, document);

    run("layout", layout::inject(document, &config));
    run("theme", theme::init(window, document));
    run("nav", nav::highlight_active(window, document));
    run("smooth scroll", nav::init_smooth_scroll(document));
    run("section spy", spy::init_section_spy(document));
    run("filter", filter::init(window, document));
    run("toc", toc::init(document));

    let toaster = match Toaster::ensure(document) {
        Ok(toaster) => toaster,
        Err(err) => {
            log::warn!("toast: {err}");
            None
        }
    };

    run("copy email", copy_email::init(window, document, &config, toaster.clone()));
    run("demo form", demo_form::init(window, document, toaster));
    run("scroll progress", progress::init(window, document));
    log::debug!("boot: behaviours attached");
}

/// Panic hook, logger and the task executor. Safe to call more than once.
///
/// The executor must be up before any handler calls `spawn_local`; it is
/// not left to `mount_to`, which only runs on pages with placeholders.
pub fn init_runtime() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    let _ = leptos::task::Executor::init_wasm_bindgen();
}

fn run(component: &str, result: BehaviorResult) {
    if let Err(err) = result {
        log::warn!("{component}: {err}");
    }
}
