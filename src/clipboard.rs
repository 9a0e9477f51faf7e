//! Clipboard writes through one of two interchangeable strategies.
//!
//! The async Clipboard API is preferred. When the page cannot reach it
//! (older engines, insecure origins) a throw-away textarea is selected and
//! `document.execCommand("copy")` is issued instead.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement, Window};

use crate::error::{describe_js, ClipboardError};

pub const COPY_FAILED_MESSAGE: &str = "Couldn't copy to clipboard";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClipboardCapabilities {
    pub async_api: bool,
    pub exec_command: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardStrategy {
    AsyncApi,
    ExecCommand,
}

impl ClipboardStrategy {
    pub fn select(caps: ClipboardCapabilities) -> Option<Self> {
        if caps.async_api {
            Some(Self::AsyncApi)
        } else if caps.exec_command {
            Some(Self::ExecCommand)
        } else {
            None
        }
    }
}

/// Toast text for a finished copy.
pub fn copy_feedback<'a>(result: &Result<(), ClipboardError>, success: &'a str) -> &'a str {
    match result {
        Ok(()) => success,
        Err(_) => COPY_FAILED_MESSAGE,
    }
}

/// Copies `text` and resolves once the write settled.
pub async fn copy_text(window: &Window, text: &str) -> Result<(), ClipboardError> {
    let caps = detect(window);
    match ClipboardStrategy::select(caps).ok_or(ClipboardError::Unavailable)? {
        ClipboardStrategy::AsyncApi => write_async(window, text).await,
        ClipboardStrategy::ExecCommand => write_fallback(window, text),
    }
}

fn detect(window: &Window) -> ClipboardCapabilities {
    let async_api = clipboard_write_fn(window).is_some();
    let exec_command = window
        .document()
        .map(|doc| doc.body().is_some() && doc.dyn_into::<HtmlDocument>().is_ok())
        .unwrap_or(false);
    ClipboardCapabilities {
        async_api,
        exec_command,
    }
}

/// `navigator.clipboard` and its `writeText`, looked up dynamically so the
/// check works on engines where either is missing.
fn clipboard_write_fn(window: &Window) -> Option<(JsValue, Function)> {
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
    let write = write.dyn_into::<Function>().ok()?;
    Some((clipboard, write))
}

async fn write_async(window: &Window, text: &str) -> Result<(), ClipboardError> {
    let (clipboard, write) = clipboard_write_fn(window).ok_or(ClipboardError::Unavailable)?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?;
    let promise: Promise = promise
        .dyn_into()
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))
}

fn write_fallback(window: &Window, text: &str) -> Result<(), ClipboardError> {
    let document = window.document().ok_or(ClipboardError::Unavailable)?;
    let body = document.body().ok_or(ClipboardError::Unavailable)?;
    let temp: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|_| ClipboardError::Unavailable)?
        .unchecked_into();
    temp.set_value(text);
    let _ = temp.set_attribute("readonly", "");
    let _ = temp
        .style()
        .set_css_text("position:fixed;top:0;left:-9999px;opacity:0;");
    body.append_child(&temp)
        .map_err(|_| ClipboardError::Unavailable)?;
    temp.select();

    let copied = document
        .unchecked_ref::<HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    temp.remove();

    if copied {
        Ok(())
    } else {
        Err(ClipboardError::FallbackRefused)
    }
}
