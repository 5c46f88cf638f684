//! Hero section with the typing animation and call-to-action buttons.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::contact;
use crate::core::TypingMachine;
use crate::core::typing::TypingTiming;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/hero.module.css");

/// Drives `text` with the typing animation until the signal is disposed.
fn run_typing(mut machine: TypingMachine, text: RwSignal<String>) {
    spawn_local(async move {
        TimeoutFuture::new(machine.initial_delay()).await;
        loop {
            let tick = machine.step(js_sys::Math::random());
            if text.try_set(tick.text).is_some() {
                break;
            }
            TimeoutFuture::new(tick.delay_ms).await;
        }
    });
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, tagline, phrases, cv_url) = ctx.content.with_value(|c| {
        (
            c.owner.clone(),
            c.tagline.clone(),
            c.phrases.clone(),
            c.cv_url.clone(),
        )
    });

    let text = RwSignal::new(String::new());
    let machine = TypingMachine::new(&phrases, TypingTiming::default());
    let animate = ctx.capabilities.animate_motion() && machine.is_some();

    match machine {
        Some(machine) if animate => run_typing(machine, text),
        // Reduced motion: first phrase, no cursor, no timers.
        Some(machine) => text.set(machine.static_text()),
        None => {}
    }

    view! {
        <section id="home" class=css::hero>
            <div class=css::intro data-reveal="">
                <p class=css::greeting>"Hi, I'm"</p>
                <h1 class=css::name>{owner}</h1>
                <p class=css::typingLine>
                    <span id="typingText" class=css::typing>{move || text.get()}</span>
                    <span
                        id="heroCursor"
                        class=css::cursor
                        aria-hidden="true"
                        style:display=if animate { "" } else { "none" }
                    >
                        "|"
                    </span>
                </p>
                <p class=css::tagline>{tagline}</p>
                <div class=css::actions>
                    <button
                        id="downloadCVBtn"
                        class=css::primary
                        type="button"
                        on:click=move |_| dom::open_in_new_tab(&cv_url)
                    >
                        <Icon icon=ic::DOWNLOAD />
                        " Download CV"
                    </button>
                    <button
                        id="contactBtn"
                        class=css::secondary
                        type="button"
                        on:click=move |_| {
                            dom::smooth_scroll_to_id(contact::SECTION_ID);
                        }
                    >
                        <Icon icon=ic::MAIL />
                        " Contact me"
                    </button>
                </div>
            </div>
        </section>
    }
}
