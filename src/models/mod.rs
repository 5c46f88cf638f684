//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Theme`], [`ThemeIcon`] - Light/dark color theme
//! - [`ToastKind`], [`ToastOptions`] - Notification styling and timing
//! - [`Capabilities`] - Environment signals injected into components
//! - [`SiteContent`] - Page content loaded from the embedded TOML asset

mod capabilities;
pub mod site;
mod theme;
mod toast;

pub use capabilities::Capabilities;
pub use site::{ContentError, NavSection, Project, SiteContent, Skill, TimelineItem};
pub use theme::{Theme, ThemeIcon, UnknownTheme};
pub use toast::{ToastKind, ToastOptions};
