//! Root application module.
//!
//! Contains the main App component, the AppContext definition, the toast
//! handle and application-level setup logic following Leptos conventions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{Footer, Hero, Navbar, Sections, ToastHost, reveal};
use crate::config::{SITE_CONTENT, toast as toast_config};
use crate::core::{ThemeManager, ToastSlot};
use crate::models::{Capabilities, SiteContent, Theme, ToastOptions};
use crate::utils::{LocalStorageStore, dom, log};

// ============================================================================
// ToastHandle
// ============================================================================

/// Handle to the page's single toast notification.
///
/// Showing a message while another is displayed replaces its text and
/// restarts the countdown. The pending dismissal timer lives in `timer`;
/// replacing it drops, and so cancels, the previous one.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    pub slot: RwSignal<ToastSlot>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ToastHandle {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::new()),
            timer: StoredValue::new_local(None),
        }
    }

    /// Shows `text` for `options.duration_ms`.
    pub fn show(&self, text: &str, options: ToastOptions) {
        let slot = self.slot;
        let Some(generation) = slot.try_update(|s| s.show(text, options)) else {
            return;
        };

        request_animation_frame(move || {
            slot.update(|s| {
                s.enter(generation);
            });
        });

        let dismiss = Timeout::new(options.duration_ms, move || {
            slot.update(|s| {
                s.leave(generation);
            });
            // Stale generations make this a no-op if a newer toast took over.
            Timeout::new(toast_config::LEAVE_TRANSITION_MS, move || {
                slot.update(|s| {
                    s.remove(generation);
                });
            })
            .forget();
        });
        self.timer.set_value(Some(dismiss));
    }
}

impl Default for ToastHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Environment signals read once at startup.
    pub capabilities: Capabilities,
    /// Page content.
    pub content: StoredValue<SiteContent>,
    /// Active color theme.
    pub theme: RwSignal<Theme>,
    /// Singleton toast notification.
    pub toast: ToastHandle,
}

impl AppContext {
    /// Creates the context from the environment and embedded content, and
    /// applies the initial theme to the document.
    pub fn new(capabilities: Capabilities) -> Self {
        let content = SiteContent::parse(SITE_CONTENT).unwrap_or_else(|e| {
            log::error(&e.to_string());
            SiteContent::default()
        });
        let theme = ThemeManager::new(LocalStorageStore).initial(capabilities.prefers_dark);
        // Before the first render, so a stored dark theme never flashes light.
        dom::apply_theme(theme);

        Self {
            capabilities,
            content: StoredValue::new(content),
            theme: RwSignal::new(theme),
            toast: ToastHandle::new(),
        }
    }

    /// Flips the theme and persists the choice.
    pub fn toggle_theme(&self) {
        let (next, saved) = ThemeManager::new(LocalStorageStore).toggle(self.theme.get_untracked());
        if let Err(e) = saved {
            log::warn(&format!("theme preference not saved: {e}"));
        }
        self.theme.set(next);
    }

    pub fn show_toast(&self, text: &str, options: ToastOptions) {
        self.toast.show(text, options);
    }
}

/// Root application component.
///
/// This component:
/// - Detects capabilities and creates the global AppContext
/// - Keeps the document theme marker in sync with the theme signal
/// - Starts the reveal engine once the page is in the DOM
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(dom::detect_capabilities());
    provide_context(ctx);

    Effect::new(move || dom::apply_theme(ctx.theme.get()));

    // Reveal targets exist only after the first render.
    let reveal_started = StoredValue::new(false);
    Effect::new(move || {
        if !reveal_started.get_value() {
            reveal_started.set_value(true);
            reveal::start(ctx.capabilities);
        }
    });

    view! {
        <Navbar />
        <main>
            <Hero />
            <Sections />
        </main>
        <Footer />
        <ToastHost />
    }
}
