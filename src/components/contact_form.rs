use leptos::ev;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::SimulatedTransport;
use crate::core::contact::{self, ContactForm as FormValues};

stylance::import_crate_style!(css, "src/components/contact_form.module.css");

/// Contact form. Submission never reloads the page; the outcome is reported
/// through the toast.
#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let values = FormValues {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let outcome = contact::submit(&values, &SimulatedTransport);
        ctx.show_toast(outcome.toast, outcome.options);
        if outcome.clear_form {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
    };

    view! {
        <form id="contactForm" class=css::form data-reveal="" on:submit=on_submit novalidate="">
            <label class=css::field>
                <span>"Name"</span>
                <input type="text" name="name" autocomplete="name" bind:value=name />
            </label>
            <label class=css::field>
                <span>"Email"</span>
                <input type="email" name="email" autocomplete="email" bind:value=email />
            </label>
            <label class=format!("{} {}", css::field, css::wide)>
                <span>"Message"</span>
                <textarea name="message" rows="5" bind:value=message></textarea>
            </label>
            <button class=css::submit type="submit">"Send message"</button>
        </form>
    }
}
