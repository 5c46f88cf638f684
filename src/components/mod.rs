//! UI components built with Leptos.
//!
//! - [`Navbar`] - Brand, section links, theme toggle and mobile menu
//! - [`Hero`] - Typing headline and call-to-action buttons
//! - [`Sections`] - About, skills, experience, projects and contact
//! - [`ContactForm`] - Contact form reporting through the toast
//! - [`ToastHost`] - Singleton toast notification
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`reveal`] - Viewport reveal wiring for rendered sections

mod contact_form;
mod hero;
pub mod icons;
mod navbar;
pub mod reveal;
mod sections;
mod theme_toggle;
mod toast;

pub use contact_form::ContactForm;
pub use hero::Hero;
pub use navbar::Navbar;
pub use sections::{Footer, Sections};
pub use theme_toggle::ThemeToggle;
pub use toast::ToastHost;
