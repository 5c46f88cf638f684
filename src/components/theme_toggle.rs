use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::theme::TOGGLE_ID;
use crate::models::ThemeIcon;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

/// Light/dark switch.
///
/// Shows the icon of the theme a click switches to. `aria-pressed` is kept
/// in sync by [`crate::utils::dom::apply_theme`].
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let theme = ctx.theme;

    let title = move || {
        if theme.get().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <button
            id=TOGGLE_ID
            class=css::iconButton
            type="button"
            title=title
            aria-pressed=theme.get_untracked().aria_pressed()
            on:click=move |_| ctx.toggle_theme()
        >
            {move || match theme.get().toggle_icon() {
                ThemeIcon::Sun => view! { <Icon icon=ic::SUN /> },
                ThemeIcon::Moon => view! { <Icon icon=ic::MOON /> },
            }}
        </button>
    }
}
