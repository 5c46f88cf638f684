//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every lookup may come back empty; callers skip the feature in that case.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Storage, Window,
};

use crate::config::{self, theme as theme_config};
use crate::models::{Capabilities, Theme};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// =============================================================================
// Environment
// =============================================================================

/// Whether a media query currently matches. Unsupported queries do not.
pub fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Whether the browser exposes `IntersectionObserver`.
pub fn has_intersection_observer() -> bool {
    window().is_some_and(|w| {
        js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// Reads the environment signals once.
pub fn detect_capabilities() -> Capabilities {
    Capabilities {
        reduced_motion: matches_media(config::REDUCED_MOTION_QUERY),
        intersection_observer: has_intersection_observer(),
        prefers_dark: matches_media(theme_config::DARK_QUERY),
    }
}

// =============================================================================
// Viewport
// =============================================================================

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scrolls `element` to the top of the viewport.
pub fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scrolls to the element with `id`.
///
/// Returns `false` when no such element exists.
pub fn smooth_scroll_to_id(id: &str) -> bool {
    match element_by_id(id) {
        Some(target) => {
            smooth_scroll_to(&target);
            true
        }
        None => false,
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && window.open_with_url_and_target(url, "_blank").is_err()
    {
        super::log::warn(&format!("could not open {url}"));
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Sets an inline style property on `element` if it is an `HtmlElement`.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Applies `theme` to the document.
///
/// Sets or clears the dark marker on `<html>` and mirrors the state into the
/// toggle's `aria-pressed` attribute when the toggle is present.
pub fn apply_theme(theme: Theme) {
    let Some(document) = document() else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = if theme.is_dark() {
            root.set_attribute(theme_config::THEME_ATTR, theme.as_str())
        } else {
            root.remove_attribute(theme_config::THEME_ATTR)
        };
    }
    if let Some(toggle) = document.get_element_by_id(theme_config::TOGGLE_ID) {
        let _ = toggle.set_attribute("aria-pressed", theme.aria_pressed());
    }
}
