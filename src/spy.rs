//! Scroll-spy: highlight the link whose section sits in the middle band of
//! the viewport.
//!
//! The browser reports visibility changes in batches at its own cadence.
//! Within a batch the last intersecting entry wins; when several sections
//! cross the band at once the delivery order, and so the winner, is up to
//! the browser.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::error::BehaviorResult;
use crate::nav::link_fragment;

/// Top and bottom retracted by 40%, leaving the middle 20% of the viewport.
pub const SPY_ROOT_MARGIN: &str = "-40% 0px -40% 0px";
const CHIP_ACTIVE_CLASS: &str = "is-active";

/// One observer entry, identified by the target's position in the observed
/// list rather than by its id, so targets sharing an id stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub target: usize,
    pub is_intersecting: bool,
}

impl Visibility {
    pub fn entering(target: usize) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: usize) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Which of a fixed number of targets is currently highlighted.
#[derive(Clone, Debug, Default)]
pub struct ActiveLinkTracker {
    len: usize,
    active: Option<usize>,
}

impl ActiveLinkTracker {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Folds one notification batch in delivery order. Leaving the band
    /// never clears the highlight; only another section entering moves it.
    pub fn apply(&mut self, batch: &[Visibility]) -> Option<usize> {
        for entry in batch.iter().filter(|entry| entry.is_intersecting) {
            if entry.target < self.len {
                self.active = Some(entry.target);
            }
        }
        self.active
    }
}

/// Observes `targets` against the spy band and hands each batch to
/// `on_batch`, with entries indexing into `targets`.
pub fn observe_band<F>(targets: &[Element], mut on_batch: F) -> Result<(), JsValue>
where
    F: FnMut(Vec<Visibility>) + 'static,
{
    let observed = targets.to_vec();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .filter_map(|entry| {
                    let target = entry.target();
                    let idx = observed.iter().position(|el| *el == target)?;
                    Some(Visibility {
                        target: idx,
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            on_batch(batch);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(SPY_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Keeps `class` on `links[i]` while `targets[i]` is the section in the band.
/// The two lists are paired by position.
pub fn attach(
    links: Vec<Element>,
    targets: Vec<Element>,
    class: &'static str,
) -> Result<(), JsValue> {
    debug_assert_eq!(links.len(), targets.len());
    if targets.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(ActiveLinkTracker::new(targets.len())));
    observe_band(&targets, move |batch| {
        let active = tracker.borrow_mut().apply(&batch);
        if let Some(link) = active.and_then(|idx| links.get(idx)) {
            dom::mark_only(&links, link, class);
        }
    })
}

/// Pairs each `.link-chip` with the element its fragment names; chips
/// pointing nowhere are left alone.
pub fn init_section_spy(document: &Document) -> BehaviorResult {
    let chips = dom::query_all(document, ".link-chip");
    if chips.is_empty() {
        log::debug!("spy: no section chips");
        return Ok(());
    }
    let (links, targets): (Vec<Element>, Vec<Element>) = chips
        .into_iter()
        .filter_map(|chip| {
            let target = link_fragment(&chip).and_then(|id| document.get_element_by_id(&id))?;
            Some((chip, target))
        })
        .unzip();
    attach(links, targets, CHIP_ACTIVE_CLASS)?;
    Ok(())
}
