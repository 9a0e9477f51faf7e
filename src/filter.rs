//! Project grid filtering by status tag and free-text search.
//!
//! The active status lives in the `filter` query parameter so a filtered
//! view can be shared. Resetting to `all` drops the parameter entirely.

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::dom;
use crate::error::BehaviorResult;

pub const FILTER_PARAM: &str = "filter";
const ALL: &str = "all";
const HIDDEN_CLASS: &str = "is-hidden";
const ACTIVE_CLASS: &str = "is-active";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL) => Self::All,
            Some(status) => Self::Status(status.to_string()),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        let value = url
            .query_pairs()
            .find(|(key, _)| key == FILTER_PARAM)
            .map(|(_, value)| value.into_owned());
        Self::parse(value.as_deref())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Status(status) => status,
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Status(wanted) => wanted == status,
        }
    }
}

/// What the filter needs to know about one project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFacts {
    pub status: String,
    pub title: String,
    pub tags: String,
}

impl CardFacts {
    fn from_element(card: &Element) -> Self {
        let title = card
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|h| h.text_content())
            .unwrap_or_default();
        Self {
            status: card.get_attribute("data-status").unwrap_or_default(),
            title,
            tags: card.get_attribute("data-tags").unwrap_or_default(),
        }
    }
}

/// Normalises raw search input for matching.
pub fn search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Status and text predicates must both hold. `term` is already normalised.
pub fn card_visible(card: &CardFacts, filter: &StatusFilter, term: &str) -> bool {
    let matches_filter = filter.matches(&card.status);
    let matches_search = term.is_empty()
        || card.title.to_lowercase().contains(term)
        || card.tags.to_lowercase().contains(term);
    matches_filter && matches_search
}

/// `href` with the filter parameter set to `filter`, or removed for `all`.
/// Other query parameters are kept in order.
pub fn filtered_href(href: &str, filter: &StatusFilter) -> Result<String, url::ParseError> {
    let mut url = Url::parse(href)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != FILTER_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() && *filter == StatusFilter::All {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        if let StatusFilter::Status(status) = filter {
            pairs.append_pair(FILTER_PARAM, status);
        }
    }
    Ok(url.into())
}

struct ProjectFilter {
    window: Window,
    buttons: Vec<Element>,
    cards: Vec<Element>,
    search: Option<HtmlInputElement>,
    current: StatusFilter,
}

impl ProjectFilter {
    fn apply(&self) {
        let term = self
            .search
            .as_ref()
            .map(|input| search_term(&input.value()))
            .unwrap_or_default();

        // Facts are read on every pass so edits to a card's markup count.
        for card in &self.cards {
            let facts = CardFacts::from_element(card);
            let hidden = !card_visible(&facts, &self.current, &term);
            let _ = card.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
        }
        for button in &self.buttons {
            let selected =
                button.get_attribute("data-filter").as_deref() == Some(self.current.as_str());
            let _ = button.class_list().toggle_with_force(ACTIVE_CLASS, selected);
        }
    }

    fn select(&mut self, filter: StatusFilter) -> BehaviorResult {
        self.current = filter;
        let href = self.window.location().href()?;
        let next = filtered_href(&href, &self.current)?;
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&next))?;
        self.apply();
        Ok(())
    }
}

pub fn init(window: &Window, document: &Document) -> BehaviorResult {
    let (Some(group), Some(grid)) = (
        dom::query(document, "[data-filter-group]"),
        dom::query(document, "[data-project-grid]"),
    ) else {
        log::debug!("filter: no filter group or project grid");
        return Ok(());
    };

    let current = Url::parse(&window.location().href()?)
        .map(|url| StatusFilter::from_url(&url))
        .unwrap_or_default();

    let buttons = dom::query_all_in(&group, "[data-filter]");
    let cards = dom::query_all_in(&grid, ".project-card");
    let search = dom::query(document, "[data-search]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    let state = Rc::new(RefCell::new(ProjectFilter {
        window: window.clone(),
        buttons: buttons.clone(),
        cards,
        search: search.clone(),
        current,
    }));

    for button in buttons {
        let state = Rc::clone(&state);
        let value = button.get_attribute("data-filter");
        dom::listen(&button, "click", move |_| {
            let filter = StatusFilter::parse(value.as_deref());
            if let Err(err) = state.borrow_mut().select(filter) {
                log::warn!("filter: {err}");
            }
        })?;
    }

    if let Some(search) = search {
        let state = Rc::clone(&state);
        dom::listen(&search, "input", move |_| state.borrow().apply())?;
    }

    state.borrow().apply();
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement};

    use super::*;
    use crate::fixture::Fixture;

    const MARKUP: &str = r#"
        <div data-filter-group>
          <button data-filter="all">All</button>
          <button data-filter="completed">Completed</button>
          <button data-filter="in-progress">In progress</button>
        </div>
        <input data-search type="search">
        <div data-project-grid>
          <article class="project-card" data-status="completed" data-tags="rust">
            <h3>Edge Router</h3>
          </article>
          <article class="project-card" data-status="in-progress" data-tags="go">
            <h3>Whiteboard</h3>
          </article>
        </div>"#;

    fn hidden_titles(page: &Fixture) -> Vec<String> {
        dom::query_all_in(&page.root, ".project-card.is-hidden h3")
            .iter()
            .filter_map(|h| h.text_content())
            .collect()
    }

    fn set_search(page: &Fixture, value: &str) {
        let input: HtmlInputElement = page.get("[data-search]").unchecked_into();
        input.set_value(value);
        input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    }

    #[wasm_bindgen_test]
    fn url_filter_applies_and_clicks_replace_history() {
        let window = web_sys::window().unwrap();
        let history = window.history().unwrap();
        let original = window.location().href().unwrap();
        let start = filtered_href(&original, &StatusFilter::parse(Some("completed"))).unwrap();
        history.replace_state_with_url(&JsValue::NULL, "", Some(&start)).unwrap();

        let page = Fixture::mount(MARKUP);
        init(&page.window, &page.document).unwrap();
        assert_eq!(hidden_titles(&page), ["Whiteboard"]);
        assert_eq!(page.count(r#"[data-filter="completed"].is-active"#), 1);

        let entries = history.length().unwrap();
        page.get(r#"[data-filter="in-progress"]"#)
            .unchecked_into::<HtmlElement>()
            .click();
        assert_eq!(history.length().unwrap(), entries);
        let href = window.location().href().unwrap();
        let url = Url::parse(&href).unwrap();
        assert_eq!(StatusFilter::from_url(&url), StatusFilter::parse(Some("in-progress")));
        assert_eq!(hidden_titles(&page), ["Edge Router"]);

        page.get(r#"[data-filter="all"]"#)
            .unchecked_into::<HtmlElement>()
            .click();
        let href = window.location().href().unwrap();
        assert!(!href.contains("filter="), "{href}");
        assert!(hidden_titles(&page).is_empty());

        history.replace_state_with_url(&JsValue::NULL, "", Some(&original)).unwrap();
    }

    #[wasm_bindgen_test]
    fn search_sees_tags_edited_after_init() {
        let window = web_sys::window().unwrap();
        let original = window.location().href().unwrap();
        let clean = filtered_href(&original, &StatusFilter::All).unwrap();
        window
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some(&clean))
            .unwrap();

        let page = Fixture::mount(MARKUP);
        init(&page.window, &page.document).unwrap();

        set_search(&page, "wasm");
        assert_eq!(hidden_titles(&page), ["Edge Router", "Whiteboard"]);

        page.get(r#"[data-status="in-progress"]"#)
            .set_attribute("data-tags", "go wasm")
            .unwrap();
        set_search(&page, "WASM ");
        assert_eq!(hidden_titles(&page), ["Edge Router"]);

        window
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some(&original))
            .unwrap();
    }
}
