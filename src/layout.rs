//! Shared header and footer, mounted into every `[data-include]` placeholder.
//!
//! Placeholders are emptied before mounting so running the injector again
//! replaces the markup instead of stacking another copy.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::BehaviorResult;
use crate::theme::TOGGLE_ID;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavPage {
    pub page: &'static str,
    pub label: &'static str,
}

pub const NAV_PAGES: [NavPage; 6] = [
    NavPage { page: "index.html", label: "Home" },
    NavPage { page: "about.html", label: "About" },
    NavPage { page: "projects.html", label: "Projects" },
    NavPage { page: "experience.html", label: "Experience" },
    NavPage { page: "skills.html", label: "Skills" },
    NavPage { page: "contact.html", label: "Contact" },
];

pub fn copyright_line(year: u32, owner: &str) -> String {
    format!("© {year} {owner}")
}

#[component]
fn SiteNav(config: SiteConfig) -> impl IntoView {
    let links = NAV_PAGES
        .iter()
        .map(|nav| {
            view! {
                <a data-nav-link="" data-page=nav.page href=nav.page>
                    {nav.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <nav class="nav container" aria-label="Primary">
                <a class="brand" href="index.html">{config.owner_name.clone()}</a>
                <div class="nav-links">{links}</div>
                <div class="nav-cta">
                    <a class="btn btn-outline" href=config.resume_href.clone()>"Download Resume"</a>
                    <a class="btn btn-primary" href="projects.html">"View Projects"</a>
                    <button class="theme-toggle" id=TOGGLE_ID aria-label="Toggle dark mode">
                        <svg class="icon icon-moon" viewBox="0 0 24 24" aria-hidden="true" focusable="false">
                            <path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8Z"/>
                        </svg>
                        <svg class="icon icon-sun" viewBox="0 0 24 24" aria-hidden="true" focusable="false">
                            <circle cx="12" cy="12" r="4"/>
                            <path d="M12 2v3M12 19v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M2 12h3M19 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1"/>
                        </svg>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn SiteFooter(config: SiteConfig, year: u32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div>
                    <strong>{config.owner_name.clone()}</strong>
                    <p class="muted">{config.email.clone()}</p>
                </div>
                <div class="footer-actions">
                    <a class="btn btn-outline" href=config.mailto_href()>"Email"</a>
                    <button class="btn btn-outline" data-copy-email="">"Copy Email"</button>
                    <a class="btn btn-outline" href=config.resume_href.clone()>"Resume"</a>
                    <a class="footer-icon" href=config.social_href.clone() aria-label=config.social_label.clone()>
                        <svg viewBox="0 0 24 24" aria-hidden="true" focusable="false">
                            <path d="M6 9v9M6 6v.1"/>
                            <path d="M10 9v9M10 13a3 3 0 0 1 6 0v5"/>
                            <rect x="3" y="3" width="18" height="18" rx="4"/>
                        </svg>
                    </a>
                </div>
            </div>
            <div class="container">
                <p>{copyright_line(year, &config.owner_name)}</p>
            </div>
        </footer>
    }
}

fn placeholders(document: &Document, target: &str) -> Vec<HtmlElement> {
    dom::query_all(document, &format!("[data-include=\"{target}\"]"))
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn inject(document: &Document, config: &SiteConfig) -> BehaviorResult {
    let year = js_sys::Date::new_0().get_full_year();

    for slot in placeholders(document, "nav") {
        slot.set_inner_html("");
        let config = config.clone();
        mount_to(slot, move || view! { <SiteNav config=config/> }).forget();
    }
    for slot in placeholders(document, "footer") {
        slot.set_inner_html("");
        let config = config.clone();
        mount_to(slot, move || view! { <SiteFooter config=config year=year/> }).forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{page_identifier, HOME_PAGE, PROJECTS_PAGE};

    #[test]
    fn six_distinct_pages() {
        let mut pages: Vec<_> = NAV_PAGES.iter().map(|p| p.page).collect();
        pages.sort_unstable();
        pages.dedup();
        assert_eq!(pages.len(), 6);
    }

    #[test]
    fn highlighter_identifiers_resolve_to_nav_entries() {
        for path in ["/", "/projects.html", "/project-api-gateway.html", "/skills.html"] {
            let id = page_identifier(path);
            assert!(NAV_PAGES.iter().any(|p| p.page == id), "{path} -> {id}");
        }
        assert_eq!(NAV_PAGES[0].page, HOME_PAGE);
        assert_eq!(NAV_PAGES[2].page, PROJECTS_PAGE);
    }

    #[test]
    fn copyright_uses_year_and_owner() {
        assert_eq!(copyright_line(2026, "Blake Beecher"), "© 2026 Blake Beecher");
    }
}
