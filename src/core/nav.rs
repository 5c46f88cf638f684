//! Navigation logic: same-page links, active section, navbar state and the
//! mobile menu.

use crate::config::nav;

/// Returns the target id of a same-page anchor (`#section`).
///
/// A bare `#` or any other href is not a same-page section link.
pub fn same_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether the navbar should carry its `scrolled` state.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > nav::SCROLLED_OFFSET
}

/// Whether the viewport is narrow enough for the hamburger menu.
pub fn is_mobile_width(width: f64) -> bool {
    width < nav::MOBILE_BREAKPOINT
}

/// Vertical extent of a page section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section under the probe line, computed from scroll offset.
///
/// The probe sits 35% of the viewport height below the top edge. When
/// several sections contain it, the last one wins.
pub fn active_from_scroll(
    scroll_y: f64,
    viewport_height: f64,
    sections: &[SectionBounds],
) -> Option<usize> {
    let probe = scroll_y + viewport_height * nav::ACTIVE_PROBE_RATIO;
    sections.iter().rposition(|s| s.contains(probe))
}

/// Maps nav links to the sections they point at, by id.
#[derive(Debug, Clone, Default)]
pub struct ActiveSection {
    link_targets: Vec<Option<String>>,
    active: Option<usize>,
}

impl ActiveSection {
    /// Builds the tracker from each nav link's `href`, in link order.
    pub fn new<S: AsRef<str>>(hrefs: &[S]) -> Self {
        Self {
            link_targets: hrefs
                .iter()
                .map(|h| same_page_target(h.as_ref()).map(str::to_string))
                .collect(),
            active: None,
        }
    }

    /// Currently active link index.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Records that the section `id` became visible.
    ///
    /// Returns the link to highlight, if any link points at it.
    pub fn on_section_visible(&mut self, id: &str) -> Option<usize> {
        let index = self
            .link_targets
            .iter()
            .position(|t| t.as_deref() == Some(id))?;
        self.active = Some(index);
        Some(index)
    }

    /// Whether link `index` should carry the active class.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Mobile hamburger menu state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Opens the menu; only narrow viewports have one.
    pub fn open(&mut self, viewport_width: f64) -> bool {
        if is_mobile_width(viewport_width) {
            self.state = MenuState::Open;
        }
        self.is_open()
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Hamburger activation.
    pub fn toggle(&mut self, viewport_width: f64) -> MenuState {
        if self.is_open() {
            self.close();
        } else {
            self.open(viewport_width);
        }
        self.state
    }

    /// A click landed somewhere in the document while the menu may be open.
    ///
    /// Clicks inside the menu or on the hamburger itself keep it open.
    pub fn on_document_click(&mut self, inside_menu: bool, on_hamburger: bool) -> MenuState {
        if self.is_open() && !inside_menu && !on_hamburger {
            self.close();
        }
        self.state
    }

    /// Debounced resize settled at `viewport_width`.
    pub fn on_resize(&mut self, viewport_width: f64) -> MenuState {
        if !is_mobile_width(viewport_width) {
            self.close();
        }
        self.state
    }
}

/// Top offset of the menu overlay, anchored below the navbar.
pub fn menu_top(navbar_bottom: f64, scroll_y: f64) -> f64 {
    navbar_bottom + scroll_y + nav::MENU_GAP_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_page_target() {
        assert_eq!(same_page_target("#about"), Some("about"));
        assert_eq!(same_page_target("#"), None);
        assert_eq!(same_page_target("/about"), None);
        assert_eq!(same_page_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(24.0));
        assert!(is_scrolled(24.5));
    }

    #[test]
    fn test_active_from_scroll() {
        let sections = [
            SectionBounds { top: 0.0, height: 800.0 },
            SectionBounds { top: 800.0, height: 600.0 },
            SectionBounds { top: 1400.0, height: 1000.0 },
        ];
        // probe = scroll + 0.35 * 1000
        assert_eq!(active_from_scroll(0.0, 1000.0, &sections), Some(0));
        assert_eq!(active_from_scroll(450.0, 1000.0, &sections), Some(1));
        assert_eq!(active_from_scroll(1049.0, 1000.0, &sections), Some(1));
        assert_eq!(active_from_scroll(1050.0, 1000.0, &sections), Some(2));
        assert_eq!(active_from_scroll(5000.0, 1000.0, &sections), None);
    }

    #[test]
    fn test_active_from_scroll_last_overlap_wins() {
        let sections = [
            SectionBounds { top: 0.0, height: 1000.0 },
            SectionBounds { top: 200.0, height: 300.0 },
        ];
        assert_eq!(active_from_scroll(0.0, 1000.0, &sections), Some(1));
    }

    #[test]
    fn test_active_section_maps_by_id() {
        let mut tracker = ActiveSection::new(&["#home", "/blog", "#projects", "#contact"]);
        assert_eq!(tracker.on_section_visible("projects"), Some(2));
        assert!(tracker.is_active(2));
        assert_eq!(tracker.on_section_visible("unlinked"), None);
        assert_eq!(tracker.active(), Some(2));
        assert_eq!(tracker.on_section_visible("contact"), Some(3));
        assert!(!tracker.is_active(2));
    }

    #[test]
    fn test_mobile_menu_scenario() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.toggle(600.0), MenuState::Open);
        assert_eq!(menu.on_document_click(false, false), MenuState::Closed);

        menu.toggle(600.0);
        assert_eq!(menu.on_resize(1200.0), MenuState::Closed);
        assert_eq!(menu.on_resize(1200.0), MenuState::Closed);
    }

    #[test]
    fn test_menu_does_not_open_on_desktop() {
        let mut menu = MobileMenu::new();
        assert!(!menu.open(980.0));
        assert_eq!(menu.toggle(1400.0), MenuState::Closed);
    }

    #[test]
    fn test_clicks_inside_keep_menu_open() {
        let mut menu = MobileMenu::new();
        menu.open(500.0);
        assert_eq!(menu.on_document_click(true, false), MenuState::Open);
        assert_eq!(menu.on_document_click(false, true), MenuState::Open);
        assert_eq!(menu.toggle(500.0), MenuState::Closed);
    }

    #[test]
    fn test_narrow_resize_keeps_menu() {
        let mut menu = MobileMenu::new();
        menu.open(700.0);
        assert_eq!(menu.on_resize(900.0), MenuState::Open);
    }

    #[test]
    fn test_menu_top() {
        assert_eq!(menu_top(64.0, 300.0), 372.0);
    }
}
