//! Host element for the singleton toast.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::toast::ELEMENT_ID;
use crate::core::toast::ToastPhase;

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Renders the current toast, if any.
///
/// The element is created while entering and kept across text replacements,
/// so replacing a message restarts no transition.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let slot = ctx.toast.slot;

    let present = move || slot.with(|s| s.current().is_some());
    let shown = move || slot.with(|s| s.current().is_some_and(|t| t.phase == ToastPhase::Visible));
    let text = move || slot.with(|s| s.current().map(|t| t.text.clone()).unwrap_or_default());
    let kind = move || slot.with(|s| s.current().map(|t| t.kind).unwrap_or_default());

    view! {
        <Show when=present>
            <div
                id=ELEMENT_ID
                class=css::toast
                role="status"
                aria-live="polite"
                style:opacity=move || if shown() { "1" } else { "0" }
                style:transform=move || {
                    if shown() { "translateY(0)" } else { "translateY(12px)" }
                }
                style:background=move || kind().background()
                style:color=move || kind().color()
            >
                {text}
            </div>
        </Show>
    }
}
