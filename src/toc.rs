//! Case-study table of contents built from the `h2` headings of the page.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::BehaviorResult;
use crate::spy;
use crate::text::slugify;

pub const TOC_TITLE: &str = "On this page";
const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    /// Whether `id` was generated and must be written back to the heading.
    pub assigned: bool,
}

impl TocEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// One entry per heading in document order. Headings without an id get a
/// slug of their text; colliding slugs are left as they are, and the
/// highlight tracks headings by position so each entry still lights up.
pub fn plan_entries<'a, I>(headings: I) -> Vec<TocEntry>
where
    I: IntoIterator<Item = (Option<&'a str>, &'a str)>,
{
    headings
        .into_iter()
        .map(|(id, text)| match id.filter(|id| !id.is_empty()) {
            Some(id) => TocEntry {
                id: id.to_string(),
                text: text.to_string(),
                assigned: false,
            },
            None => TocEntry {
                id: slugify(text),
                text: text.to_string(),
                assigned: true,
            },
        })
        .collect()
}

pub fn init(document: &Document) -> BehaviorResult {
    let (Some(toc), Some(content)) = (
        dom::query(document, "[data-toc]"),
        dom::query(document, ".case-content"),
    ) else {
        log::debug!("toc: no container or content region");
        return Ok(());
    };

    let headings = dom::query_all_in(&content, "h2");
    if headings.is_empty() {
        log::debug!("toc: no headings");
        return Ok(());
    }

    let raw: Vec<(String, String)> = headings
        .iter()
        .map(|h| (h.id(), h.text_content().unwrap_or_default()))
        .collect();
    let entries = plan_entries(raw.iter().map(|(id, text)| (Some(id.as_str()), text.as_str())));

    let list = document.create_element("ul")?;
    let mut links = Vec::with_capacity(entries.len());
    for (heading, entry) in headings.iter().zip(&entries) {
        if entry.assigned {
            heading.set_id(&entry.id);
        }
        links.push(append_link(document, &list, entry)?);
    }

    toc.set_inner_html(&format!("<h3>{TOC_TITLE}</h3>"));
    toc.append_child(&list)?;

    spy::attach(links, headings, ACTIVE_CLASS)?;
    Ok(())
}

fn append_link(
    document: &Document,
    list: &Element,
    entry: &TocEntry,
) -> Result<Element, JsValue> {
    let item = document.create_element("li")?;
    let link = document.create_element("a")?;
    link.set_attribute("href", &entry.href())?;
    link.set_text_content(Some(&entry.text));
    item.append_child(&link)?;
    list.append_child(&item)?;
    Ok(link)
}
