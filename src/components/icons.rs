//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuMail as Mail, LuMenu as Menu, LuMoon as Moon, LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsDownload as Download, BsEnvelope as Mail, BsList as Menu, BsMoon as Moon,
        BsSun as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(MENU, Menu);
themed_icon!(DOWNLOAD, Download);
themed_icon!(MAIL, Mail);
