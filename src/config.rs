//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Page content is loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Page content: phrases, sections, skills, timeline, projects.
pub const SITE_CONTENT: &str = include_str!("../assets/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used as a log prefix.
pub const APP_NAME: &str = "folio";

/// Mount point for the application root.
pub const ROOT_ELEMENT_ID: &str = "app";

// =============================================================================
// Typing Animation
// =============================================================================

/// Hero typing animation timings (milliseconds).
pub mod typing {
    /// Delay before the first character is typed.
    pub const INITIAL_DELAY: u32 = 700;
    /// Base delay between typed characters.
    pub const TYPE_BASE: u32 = 60;
    /// Upper bound of the random jitter added to each typed character.
    pub const TYPE_JITTER: f64 = 25.0;
    /// Hold time once a phrase is fully typed.
    pub const PAUSE: u32 = 1200;
    /// Base delay between erased characters.
    pub const ERASE_BASE: u32 = 30;
    /// Upper bound of the random jitter added to each erased character.
    pub const ERASE_JITTER: f64 = 12.0;
    /// Gap between a fully erased phrase and the next one.
    pub const NEXT_PHRASE: u32 = 420;
}

// =============================================================================
// Reveal Engine
// =============================================================================

/// Viewport reveal thresholds and DOM contract.
pub mod reveal {
    /// Visible fraction that reveals a `[data-reveal]` element.
    pub const REVEAL_THRESHOLD: f64 = 0.14;
    /// Visible fraction that fills a progress bar or shows a timeline item.
    pub const PROGRESS_THRESHOLD: f64 = 0.18;
    /// Stagger before a progress bar starts filling.
    pub const PROGRESS_STAGGER_MS: u32 = 120;

    /// Class applied once an element has been revealed.
    pub const SHOWN_CLASS: &str = "show";
    pub const REVEAL_SELECTOR: &str = "[data-reveal]";
    pub const PROGRESS_SELECTOR: &str = ".progress";
    pub const TIMELINE_SELECTOR: &str = ".timeline-item";
    /// Attribute holding the target fill percentage of a progress element.
    pub const PERCENT_ATTR: &str = "data-percent";
    /// Inner bar of a progress element.
    pub const BAR_SELECTOR: &str = "span";
}

// =============================================================================
// Navigation
// =============================================================================

/// Navbar, active-section and mobile menu configuration.
pub mod nav {
    /// Viewport width below which the hamburger menu is used.
    pub const MOBILE_BREAKPOINT: f64 = 980.0;
    /// Vertical scroll offset past which the navbar is marked `scrolled`.
    pub const SCROLLED_OFFSET: f64 = 24.0;
    /// Section visibility fraction that marks its nav link active.
    pub const SECTION_THRESHOLD: f64 = 0.5;
    /// Fraction of the viewport height added to the scroll offset when
    /// locating the current section without an observer.
    pub const ACTIVE_PROBE_RATIO: f64 = 0.35;
    /// Resize debounce before closing the mobile menu.
    pub const RESIZE_DEBOUNCE_MS: u32 = 120;
    /// Gap between the navbar bottom and the mobile menu overlay.
    pub const MENU_GAP_PX: f64 = 8.0;
    /// Right inset of the mobile menu overlay.
    pub const MENU_RIGHT_PX: f64 = 14.0;

    pub const NAV_WRAP_ID: &str = "navWrap";
    pub const MAIN_NAV_ID: &str = "mainNav";
    pub const HAMBURGER_ID: &str = "hamburger";
    pub const SCROLLED_CLASS: &str = "scrolled";
    pub const ACTIVE_CLASS: &str = "active";
    /// Attribute marking the mobile menu as open.
    pub const OPEN_ATTR: &str = "data-open";

    /// Media query matching narrow (hamburger) viewports.
    pub const MOBILE_QUERY: &str = "(max-width: 979.98px)";
}

// =============================================================================
// Theme
// =============================================================================

/// Theme persistence and document marker.
pub mod theme {
    /// localStorage key for the theme preference.
    pub const STORAGE_KEY: &str = "folio_theme_pref";
    /// Attribute set on `<html>` while dark mode is active.
    pub const THEME_ATTR: &str = "data-theme";
    pub const TOGGLE_ID: &str = "themeToggle";
    pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
}

/// Media query signalling a reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// Toast
// =============================================================================

/// Toast notification timings.
pub mod toast {
    /// DOM id of the singleton toast element.
    pub const ELEMENT_ID: &str = "pa-toast";
    /// Default display duration.
    pub const DEFAULT_DURATION_MS: u32 = 3500;
    /// Duration of the leave transition before the element is detached.
    pub const LEAVE_TRANSITION_MS: u32 = 320;
}

// =============================================================================
// Tilt
// =============================================================================

/// Pointer tilt transform parameters.
pub mod tilt {
    pub const SELECTOR: &str = "[data-tilt]";
    /// Degrees of rotation per unit of pointer offset from the center.
    /// Offsets span -0.5..=0.5, so an edge tilts half this much.
    pub const ROTATION_SCALE_DEG: f64 = 8.0;
    pub const PERSPECTIVE_PX: f64 = 900.0;
    /// Upward lift while hovered.
    pub const LIFT_PX: f64 = 6.0;
    pub const SCALE: f64 = 1.01;
}

// =============================================================================
// Contact
// =============================================================================

/// Contact form messages.
pub mod contact {
    pub const INCOMPLETE_MESSAGE: &str = "Please complete all fields before sending.";
    pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent.";
    pub const FAILED_MESSAGE: &str = "Your message could not be sent. Please try again later.";
    /// Id of the section the hero "Contact me" button scrolls to.
    pub const SECTION_ID: &str = "contact";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
