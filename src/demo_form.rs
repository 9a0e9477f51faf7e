//! Contact form that copies its contents instead of posting them.
//!
//! Submission is always cancelled; no request ever leaves the page.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlFormElement, Window};

use crate::clipboard::{copy_feedback, copy_text};
use crate::dom;
use crate::error::BehaviorResult;
use crate::toast::Toaster;

pub const INVALID_MESSAGE: &str = "Please fill out the required fields";
pub const SENT_MESSAGE: &str = "Thanks! Message copied to clipboard";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSubmission {
    fn from_form(form: &HtmlFormElement) -> Self {
        let Ok(data) = FormData::new_with_form(form) else {
            return Self::default();
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            message: field("message"),
        }
    }

    pub fn to_clipboard_text(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

pub fn init(window: &Window, document: &Document, toaster: Option<Toaster>) -> BehaviorResult {
    let Some(form) = dom::query(document, "[data-demo-form]")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("demo form: not on this page");
        return Ok(());
    };

    let window = window.clone();
    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();

        if !form.check_validity() {
            form.report_validity();
            if let Some(toaster) = &toaster {
                toaster.show(INVALID_MESSAGE);
            }
            return;
        }

        let text = FormSubmission::from_form(&form).to_clipboard_text();
        let window = window.clone();
        let form = form.clone();
        let toaster = toaster.clone();
        spawn_local(async move {
            let result = copy_text(&window, &text).await;
            match &result {
                Ok(()) => form.reset(),
                Err(err) => log::warn!("demo form: {err}"),
            }
            if let Some(toaster) = toaster {
                toaster.show(copy_feedback(&result, SENT_MESSAGE));
            }
        });
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_three_labelled_lines_in_order() {
        let submission = FormSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        };
        let text = submission.to_clipboard_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            ["Name: Ada", "Email: ada@example.com", "Message: Hello there"]
        );
    }

    #[test]
    fn missing_fields_copy_as_empty() {
        assert_eq!(
            FormSubmission::default().to_clipboard_text(),
            "Name: \nEmail: \nMessage: "
        );
    }
}
