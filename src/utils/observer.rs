//! `IntersectionObserver` wrapper.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Creates an observer firing `on_entry` for every entry it reports.
///
/// The callback receives the observer so it can `unobserve` targets. The
/// callback is kept alive for the lifetime of the page.
pub fn intersection_observer<F>(threshold: f64, mut on_entry: F) -> Option<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&threshold.into());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    callback.forget();

    match observer {
        Ok(observer) => Some(observer),
        Err(_) => {
            super::log::warn("IntersectionObserver could not be created");
            None
        }
    }
}
