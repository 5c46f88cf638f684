//! Console logging.
//!
//! Messages are prefixed with the application name. Outside the browser
//! (native test builds) logging is a no-op.

pub fn debug(message: &str) {
    write(Level::Debug, message);
}

pub fn warn(message: &str) {
    write(Level::Warn, message);
}

pub fn error(message: &str) {
    write(Level::Error, message);
}

#[derive(Clone, Copy)]
enum Level {
    Debug,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, message: &str) {
    let line = wasm_bindgen::JsValue::from_str(&format!(
        "[{}] {message}",
        crate::config::APP_NAME
    ));
    match level {
        Level::Debug => web_sys::console::debug_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write(_level: Level, _message: &str) {}
