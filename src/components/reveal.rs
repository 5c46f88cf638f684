//! Viewport reveal wiring.
//!
//! Finds the reveal, progress and timeline elements in the rendered page and
//! connects each set to its own [`RevealWatcher`] through an
//! `IntersectionObserver`. Without an observer, or with reduced motion,
//! every element is revealed immediately.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::reveal::{
    BAR_SELECTOR, PERCENT_ATTR, PROGRESS_SELECTOR, REVEAL_SELECTOR, SHOWN_CLASS,
    TIMELINE_SELECTOR,
};
use crate::core::reveal::{RevealEffect, RevealTarget, Visibility, parse_percent};
use crate::core::{RevealKind, RevealWatcher};
use crate::models::Capabilities;
use crate::utils::{dom, intersection_observer, log};

/// Starts all three watchers. Call once, after the page is rendered.
pub fn start(capabilities: Capabilities) {
    watch(RevealKind::Reveal, REVEAL_SELECTOR, capabilities);
    watch(RevealKind::Progress, PROGRESS_SELECTOR, capabilities);
    watch(RevealKind::Timeline, TIMELINE_SELECTOR, capabilities);
}

fn watch(kind: RevealKind, selector: &str, capabilities: Capabilities) {
    let elements = dom::query_all(selector);
    if elements.is_empty() {
        return;
    }

    let mut watcher = RevealWatcher::new(kind);
    let ids: Vec<_> = elements
        .iter()
        .map(|el| watcher.register(target_for(kind, el)))
        .collect();
    let watcher = Rc::new(RefCell::new(watcher));

    let observer = if capabilities.animate_reveals() {
        let targets = elements.clone();
        let state = Rc::clone(&watcher);
        intersection_observer(kind.threshold(), move |entry, observer| {
            let target = entry.target();
            let Some(index) = targets.iter().position(|el| *el == target) else {
                return;
            };
            let visibility = Visibility {
                is_intersecting: entry.is_intersecting(),
            };
            let effect = state.borrow_mut().on_visibility(ids[index], visibility);
            if let Some(effect) = effect {
                observer.unobserve(&target);
                apply(&target, effect);
            }
        })
    } else {
        None
    };

    match observer {
        Some(observer) => {
            for element in &elements {
                observer.observe(element);
            }
            log::debug(&format!("observing {} {:?} elements", elements.len(), kind));
        }
        None => {
            for (id, effect) in watcher.borrow_mut().reveal_all() {
                apply(&elements[id.index()], effect);
            }
        }
    }
}

fn target_for(kind: RevealKind, element: &Element) -> RevealTarget {
    match kind {
        RevealKind::Progress => RevealTarget::Bar {
            percent: parse_percent(element.get_attribute(PERCENT_ATTR).as_deref()),
        },
        RevealKind::Reveal | RevealKind::Timeline => RevealTarget::Marker,
    }
}

fn apply(element: &Element, effect: RevealEffect) {
    match effect {
        RevealEffect::AddMarker => {
            let _ = element.class_list().add_1(SHOWN_CLASS);
        }
        RevealEffect::FillBar { percent, delay_ms } => {
            let Some(bar) = element.query_selector(BAR_SELECTOR).ok().flatten() else {
                return;
            };
            let width = format!("{percent}%");
            if delay_ms == 0 {
                dom::set_style(&bar, "width", &width);
            } else {
                Timeout::new(delay_ms, move || dom::set_style(&bar, "width", &width)).forget();
            }
        }
    }
}
