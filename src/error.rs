use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid page url: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        Self::Dom(describe_js(&value))
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("no clipboard strategy is available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("fallback copy command was refused")]
    FallbackRefused,
}

/// Best-effort text for a thrown JS value; `Error` objects expose their message.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

pub type BehaviorResult = Result<(), BehaviorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_error_converts_into_behavior_error() {
        let err: BehaviorError = ClipboardError::FallbackRefused.into();
        assert_eq!(err.to_string(), "fallback copy command was refused");
    }

    #[test]
    fn url_error_is_wrapped() {
        let parse = url::Url::parse("not a url").unwrap_err();
        let err: BehaviorError = parse.into();
        assert!(err.to_string().starts_with("invalid page url"));
    }
}
