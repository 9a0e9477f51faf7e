//! Light/dark theme state, persistence and the toggle control.
//!
//! `ThemeStore` owns the current value and fans every change out to its
//! subscribers: the root `data-theme` attribute, the persisted preference,
//! and the toggle's accessible label. Initialisation is itself a change, so
//! all three are written once on load.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Document, Storage, Window};

use crate::dom;
use crate::error::BehaviorResult;

pub const STORAGE_KEY: &str = "theme";
pub const ROOT_ATTRIBUTE: &str = "data-theme";
pub const TOGGLE_ID: &str = "theme-toggle";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label announcing what the toggle does next.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Stored preference wins; otherwise the system preference decides.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Where the chosen theme is remembered between page loads.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

impl PreferenceStore for Storage {
    fn load(&self) -> Option<String> {
        self.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Err(err) = self.set_item(STORAGE_KEY, value) {
            log::warn!("theme: could not persist preference: {err:?}");
        }
    }
}

type Subscriber = Box<dyn Fn(Theme)>;

pub struct ThemeStore {
    current: Cell<Theme>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> Theme {
        self.current.get()
    }

    pub fn subscribe(&self, subscriber: impl Fn(Theme) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(theme);
        }
    }

    /// Re-announces the current value to every subscriber.
    pub fn publish(&self) {
        self.set(self.get());
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }
}

pub fn init(window: &Window, document: &Document) -> BehaviorResult {
    let storage = window.local_storage().ok().flatten();
    let stored = storage.as_ref().and_then(|s| s.load());
    let prefers_dark = window
        .match_media(DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());

    let store = Rc::new(ThemeStore::new(Theme::resolve(stored.as_deref(), prefers_dark)));

    if let Some(root) = document.document_element() {
        store.subscribe(move |theme| {
            let _ = root.set_attribute(ROOT_ATTRIBUTE, theme.as_str());
        });
    }
    if let Some(storage) = storage {
        store.subscribe(move |theme| storage.save(theme.as_str()));
    }
    let toggle = document.get_element_by_id(TOGGLE_ID);
    if let Some(toggle) = toggle.clone() {
        store.subscribe(move |theme| {
            let _ = toggle.set_attribute("aria-label", theme.toggle_label());
        });
    }

    store.publish();
    log::debug!("theme: initialised as {}", store.get().as_str());

    if let Some(toggle) = toggle {
        let store = Rc::clone(&store);
        dom::listen(&toggle, "click", move |_| {
            store.toggle();
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<String>>);

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn system_preference_applies_without_stored_value() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn stored_preference_beats_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn toggle_parity_decides_final_state() {
        for initial in [Theme::Light, Theme::Dark] {
            for n in 0..7 {
                let store = ThemeStore::new(initial);
                for _ in 0..n {
                    store.toggle();
                }
                let expected = if n % 2 == 1 { initial.toggled() } else { initial };
                assert_eq!(store.get(), expected, "initial={initial:?} n={n}");
            }
        }
    }

    #[test]
    fn every_transition_reaches_all_subscribers() {
        let persisted = Rc::new(MemoryStore::default());
        let labels = Rc::new(RefCell::new(Vec::new()));

        let store = ThemeStore::new(Theme::resolve(persisted.load().as_deref(), true));
        {
            let persisted = Rc::clone(&persisted);
            store.subscribe(move |theme| persisted.save(theme.as_str()));
        }
        {
            let labels = Rc::clone(&labels);
            store.subscribe(move |theme| labels.borrow_mut().push(theme.toggle_label()));
        }

        store.publish();
        assert_eq!(persisted.load().as_deref(), Some("dark"));

        store.toggle();
        assert_eq!(persisted.load().as_deref(), Some("light"));
        assert_eq!(
            *labels.borrow(),
            vec!["Switch to light mode", "Switch to dark mode"]
        );
    }

    #[test]
    fn persisted_choice_survives_reload() {
        let persisted = MemoryStore::default();
        persisted.save(Theme::Dark.as_str());
        assert_eq!(Theme::resolve(persisted.load().as_deref(), false), Theme::Dark);
    }
}
