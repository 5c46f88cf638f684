//! Navigation bar component.
//!
//! Renders the brand, section links, theme toggle and hamburger control, and
//! owns the navigation behavior:
//!
//! - same-page links smooth-scroll instead of jumping
//! - the link of the section under the viewport center is marked active
//! - the bar is marked `scrolled` past a small offset
//! - below the breakpoint the links collapse into a hamburger menu that
//!   closes on outside click, link click, or widening past the breakpoint

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};

use super::ThemeToggle;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::nav;
use crate::core::nav::{SectionBounds, active_from_scroll, is_scrolled, menu_top, same_page_target};
use crate::core::{ActiveSection, MobileMenu};
use crate::models::NavSection;
use crate::utils::{dom, intersection_observer};

stylance::import_crate_style!(css, "src/components/navbar.module.css");

// ============================================================================
// Active Section Tracking
// ============================================================================

/// Marks links active from section visibility, or from scroll position when
/// no observer is available.
#[derive(Clone, Copy)]
struct ActiveLinks {
    tracker: StoredValue<ActiveSection>,
    active: RwSignal<Option<usize>>,
}

impl ActiveLinks {
    fn new(sections: &[NavSection]) -> Self {
        let hrefs: Vec<String> = sections.iter().map(NavSection::href).collect();
        Self {
            tracker: StoredValue::new(ActiveSection::new(&hrefs)),
            active: RwSignal::new(None),
        }
    }

    fn section_visible(&self, id: &str) {
        if let Some(index) = self
            .tracker
            .try_update_value(|t| t.on_section_visible(id))
            .flatten()
        {
            self.active.set(Some(index));
        }
    }

    /// Observes every section at the configured visibility fraction.
    ///
    /// Returns `false` when no observer could be created.
    fn observe(self, sections: &[NavSection]) -> bool {
        let Some(observer) = intersection_observer(nav::SECTION_THRESHOLD, move |entry, _| {
            if entry.is_intersecting() {
                self.section_visible(&entry.target().id());
            }
        }) else {
            return false;
        };
        for section in sections {
            if let Some(element) = dom::element_by_id(&section.id) {
                observer.observe(&element);
            }
        }
        true
    }

    /// Scroll-position fallback.
    fn update_from_scroll(&self, sections: &[NavSection]) {
        let (ids, bounds): (Vec<&str>, Vec<SectionBounds>) = sections
            .iter()
            .filter_map(|section| {
                let element = dom::element_by_id(&section.id)?.dyn_into::<HtmlElement>().ok()?;
                Some((
                    section.id.as_str(),
                    SectionBounds {
                        top: element.offset_top() as f64,
                        height: element.offset_height() as f64,
                    },
                ))
            })
            .unzip();

        if let Some(index) = active_from_scroll(dom::scroll_y(), dom::viewport_height(), &bounds) {
            self.section_visible(ids[index]);
        }
    }
}

// ============================================================================
// Navbar Component
// ============================================================================

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, sections) = ctx
        .content
        .with_value(|c| (c.owner.clone(), c.sections.clone()));
    let sections = StoredValue::new(sections);

    let links = sections.with_value(|s| ActiveLinks::new(s));
    let menu = RwSignal::new(MobileMenu::new());
    let menu_offset = RwSignal::new(0.0);
    let scrolled = RwSignal::new(is_scrolled(dom::scroll_y()));
    let resize_timer = StoredValue::new_local(None::<Timeout>);
    let is_mobile = use_media_query(nav::MOBILE_QUERY.to_string());

    let wrap_ref = NodeRef::<leptos::html::Header>::new();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let hamburger_ref = NodeRef::<leptos::html::Button>::new();

    // Section observation needs the sections in the DOM.
    let use_scroll_fallback = StoredValue::new(!ctx.capabilities.intersection_observer);
    Effect::new(move || {
        if !use_scroll_fallback.get_value() {
            let observing = sections.with_value(|s| links.observe(s));
            use_scroll_fallback.set_value(!observing);
        }
    });

    let _ = window_event_listener(ev::scroll, move |_| {
        scrolled.set(is_scrolled(dom::scroll_y()));
        if use_scroll_fallback.get_value() {
            sections.with_value(|s| links.update_from_scroll(s));
        }
    });

    let _ = window_event_listener(ev::resize, move |_| {
        let timer = Timeout::new(nav::RESIZE_DEBOUNCE_MS, move || {
            menu.update(|m| {
                m.on_resize(dom::viewport_width());
            });
        });
        resize_timer.set_value(Some(timer));
    });

    let _ = window_event_listener(ev::click, move |ev| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside_menu = nav_ref
            .get_untracked()
            .is_some_and(|nav| nav.contains(target.as_ref()));
        let on_hamburger = hamburger_ref
            .get_untracked()
            .is_some_and(|button| button.contains(target.as_ref()));
        menu.update(|m| {
            m.on_document_click(inside_menu, on_hamburger);
        });
    });

    let on_hamburger = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        let width = dom::viewport_width();
        menu.update(|m| {
            m.toggle(width);
        });
        if menu.get_untracked().is_open()
            && let Some(wrap) = wrap_ref.get_untracked()
        {
            menu_offset.set(menu_top(wrap.get_bounding_client_rect().bottom(), dom::scroll_y()));
        }
    };

    let menu_style = move || {
        if menu.get().is_open() {
            format!(
                "display:block;position:absolute;right:{}px;top:{}px;background:var(--glass);\
                 padding:10px;border-radius:10px;box-shadow:var(--shadow-soft);z-index:120",
                nav::MENU_RIGHT_PX,
                menu_offset.get()
            )
        } else {
            String::new()
        }
    };

    let link_views = sections
        .get_value()
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let href = section.href();
            let on_click = {
                let href = href.clone();
                move |ev: ev::MouseEvent| {
                    if let Some(id) = same_page_target(&href) {
                        ev.prevent_default();
                        dom::smooth_scroll_to_id(id);
                        menu.update(|m| m.close());
                    }
                }
            };
            view! {
                <a
                    href=href
                    class=css::link
                    class:active=move || links.active.get() == Some(index)
                    on:click=on_click
                >
                    {section.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header
            id=nav::NAV_WRAP_ID
            node_ref=wrap_ref
            class=css::navWrap
            class:scrolled=move || scrolled.get()
        >
            <a class=css::brand href="#home">{owner}</a>

            <nav
                id=nav::MAIN_NAV_ID
                node_ref=nav_ref
                class=format!("{} main-nav", css::mainNav)
                data-open=move || menu.get().is_open().then_some("true")
                style=menu_style
            >
                {link_views}
            </nav>

            <div class=css::actions>
                <ThemeToggle />
                <button
                    id=nav::HAMBURGER_ID
                    node_ref=hamburger_ref
                    class=css::hamburger
                    type="button"
                    aria-label="Open menu"
                    aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    style:display=move || if is_mobile.get() { "inline-flex" } else { "none" }
                    on:click=on_hamburger
                >
                    <Icon icon=ic::MENU />
                </button>
            </div>
        </header>
    }
}
