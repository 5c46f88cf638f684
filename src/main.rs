use folio::app::App;
use folio::config::ROOT_ELEMENT_ID;
use folio::utils::dom;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = dom::document()
        .and_then(|doc| doc.get_element_by_id(ROOT_ELEMENT_ID))
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
