//! `[data-copy-email]` buttons put the owner's address on the clipboard.

use leptos::task::spawn_local;
use web_sys::{Document, Window};

use crate::clipboard::{copy_feedback, copy_text};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::BehaviorResult;
use crate::toast::Toaster;

pub const COPIED_MESSAGE: &str = "Email copied to clipboard";

pub fn init(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
    toaster: Option<Toaster>,
) -> BehaviorResult {
    let buttons = dom::query_all(document, "[data-copy-email]");
    if buttons.is_empty() {
        log::debug!("copy email: no copy buttons");
        return Ok(());
    }

    for button in buttons {
        let window = window.clone();
        let email = config.email.clone();
        let toaster = toaster.clone();
        dom::listen(&button, "click", move |_| {
            let window = window.clone();
            let email = email.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let result = copy_text(&window, &email).await;
                if let Err(err) = &result {
                    log::warn!("copy email: {err}");
                }
                if let Some(toaster) = toaster {
                    toaster.show(copy_feedback(&result, COPIED_MESSAGE));
                }
            });
        })?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;
    use crate::fixture::Fixture;

    #[wasm_bindgen_test]
    async fn click_reports_without_layout_placeholders() {
        crate::init_runtime();
        let page = Fixture::mount(r#"<button type="button" data-copy-email>Copy</button>"#);
        assert_eq!(page.count("[data-include]"), 0);

        let toaster = Toaster::ensure(&page.document).unwrap();
        init(&page.window, &page.document, &SiteConfig::default(), toaster).unwrap();

        let before = page.count(".toast");
        page.get("[data-copy-email]")
            .unchecked_into::<HtmlElement>()
            .click();
        TimeoutFuture::new(50).await;

        // Either outcome is fine here; the task must have run to completion.
        assert_eq!(page.count(".toast"), before + 1);
    }
}
