//! Site-wide values shared by the injected layout and the copy actions.
//!
//! A page can override any field either through a `window.siteConfig`
//! object or an inline `<script type="application/json" id="site-config">`
//! block. Missing fields keep their defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

const CONFIG_GLOBAL: &str = "siteConfig";
const CONFIG_SCRIPT_ID: &str = "site-config";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub email: String,
    pub resume_href: String,
    pub social_href: String,
    pub social_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Blake Beecher".to_string(),
            email: "beechclt@gmail.com".to_string(),
            resume_href: "#".to_string(),
            social_href: "#".to_string(),
            social_label: "LinkedIn".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Resolves the config for the current page: global object, then inline
    /// JSON block, then defaults.
    pub fn load(window: &Window, document: &Document) -> Self {
        if let Some(config) = Self::from_global(window) {
            log::debug!("config: using window.{CONFIG_GLOBAL}");
            return config;
        }
        let inline = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content());
        if let Some(raw) = inline {
            match Self::from_json(&raw) {
                Some(config) => return config,
                None => log::warn!("config: #{CONFIG_SCRIPT_ID} is not valid JSON, using defaults"),
            }
        }
        Self::default()
    }

    fn from_global(window: &Window) -> Option<Self> {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value(value).ok()
    }
}
