//! Core behavior logic, independent of the browser.
//!
//! Every interactive behavior of the page is a small state machine here;
//! components feed it DOM events and timer ticks and apply what it returns.
//!
//! - [`typing`] - Hero typing/pausing/erasing cycle
//! - [`reveal`] - One-shot viewport reveal watchers
//! - [`nav`] - Active section, navbar state, mobile menu
//! - [`theme`] - Theme resolution and persistence
//! - [`contact`] - Contact form validation and delivery
//! - [`toast`] - Singleton notification lifecycle
//! - [`tilt`] - Pointer tilt transform

pub mod contact;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod tilt;
pub mod toast;
pub mod typing;

pub use contact::{ContactForm, SimulatedTransport};
pub use nav::{ActiveSection, MenuState, MobileMenu};
pub use reveal::{RevealKind, RevealWatcher};
pub use theme::{PreferenceStore, ThemeManager};
pub use tilt::TiltSession;
pub use toast::ToastSlot;
pub use typing::TypingMachine;
