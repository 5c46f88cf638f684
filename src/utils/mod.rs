//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - Window, document, viewport, scrolling and theme marker helpers
//! - [`log`] - Prefixed console logging
//! - [`LocalStorageStore`] - localStorage-backed preference store
//! - [`intersection_observer`] - Closure-based `IntersectionObserver` setup

pub mod dom;
pub mod log;
mod observer;
mod storage;

pub use observer::intersection_observer;
pub use storage::LocalStorageStore;
