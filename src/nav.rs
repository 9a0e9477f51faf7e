//! Active-page highlighting and smooth same-page scrolling.

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::dom;
use crate::error::BehaviorResult;

pub const HOME_PAGE: &str = "index.html";
pub const PROJECTS_PAGE: &str = "projects.html";
const PROJECT_DETAIL_PREFIX: &str = "project-";
const ACTIVE_CLASS: &str = "active";

/// Page identifier for `pathname`: its last segment, with project detail
/// pages folded into the projects listing.
pub fn page_identifier(pathname: &str) -> &str {
    let file_name = pathname.rsplit('/').next().unwrap_or_default();
    if file_name.is_empty() {
        HOME_PAGE
    } else if file_name.starts_with(PROJECT_DETAIL_PREFIX) {
        PROJECTS_PAGE
    } else {
        file_name
    }
}

/// In-page element id referenced by `href`, if it is a usable fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn highlight_active(window: &Window, document: &Document) -> BehaviorResult {
    let links = dom::query_all(document, "[data-nav-link]");
    if links.is_empty() {
        log::debug!("nav: no navigation links");
        return Ok(());
    }

    let pathname = window.location().pathname()?;
    let active = page_identifier(&pathname);
    for link in &links {
        let matches = link.get_attribute("data-page").as_deref() == Some(active);
        link.class_list().toggle_with_force(ACTIVE_CLASS, matches)?;
    }
    Ok(())
}

pub fn init_smooth_scroll(document: &Document) -> BehaviorResult {
    for anchor in dom::query_all(document, "a[href^='#']") {
        let target_doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| target_doc.get_element_by_id(id))
            else {
                return;
            };
            event.prevent_default();
            scroll_smoothly_to(&target);
        })?;
    }
    Ok(())
}

fn scroll_smoothly_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// `href` of a chip or TOC link as a fragment id.
pub fn link_fragment(link: &Element) -> Option<String> {
    let href = link.get_attribute("href")?;
    fragment_target(&href).map(str::to_string)
}
