//! One-shot viewport reveal watchers.
//!
//! Each [`RevealWatcher`] owns a set of registered elements and turns
//! visibility reports into at most one [`RevealEffect`] per element. Once an
//! element fires it is deregistered and later reports are ignored.

use crate::config::reveal;

/// The three independent reveal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// `[data-reveal]` elements.
    Reveal,
    /// `.progress` bars filled to their `data-percent`.
    Progress,
    /// `.timeline-item` entries.
    Timeline,
}

impl RevealKind {
    /// Visible fraction the observer for this kind is configured with.
    pub fn threshold(self) -> f64 {
        match self {
            RevealKind::Reveal => reveal::REVEAL_THRESHOLD,
            RevealKind::Progress | RevealKind::Timeline => reveal::PROGRESS_THRESHOLD,
        }
    }
}

/// What a registered element turns into once it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// Gains the shown marker class.
    Marker,
    /// Inner bar is widened to `percent`.
    Bar { percent: u8 },
}

/// Terminal visual state to apply to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    AddMarker,
    FillBar { percent: u8, delay_ms: u32 },
}

/// A visibility report for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
}

/// Handle returned by [`RevealWatcher::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

impl RevealId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Registration {
    target: RevealTarget,
    revealed: bool,
}

#[derive(Debug, Clone)]
pub struct RevealWatcher {
    kind: RevealKind,
    registrations: Vec<Registration>,
}

impl RevealWatcher {
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            registrations: Vec::new(),
        }
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    pub fn register(&mut self, target: RevealTarget) -> RevealId {
        self.registrations.push(Registration {
            target,
            revealed: false,
        });
        RevealId(self.registrations.len() - 1)
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.registrations.iter().filter(|r| !r.revealed).count()
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.registrations.get(id.0).is_some_and(|r| r.revealed)
    }

    /// Handles a visibility report, firing at most once per element.
    ///
    /// A returned effect means the caller should apply it and stop observing
    /// the element.
    pub fn on_visibility(&mut self, id: RevealId, visibility: Visibility) -> Option<RevealEffect> {
        if !visibility.is_intersecting {
            return None;
        }
        let registration = self.registrations.get_mut(id.0)?;
        if registration.revealed {
            return None;
        }
        registration.revealed = true;
        Some(effect_for(registration.target, reveal::PROGRESS_STAGGER_MS))
    }

    /// Reveals every pending element at once, without staggering.
    ///
    /// Used when observation is unavailable or motion is reduced.
    pub fn reveal_all(&mut self) -> Vec<(RevealId, RevealEffect)> {
        self.registrations
            .iter_mut()
            .enumerate()
            .filter(|(_, r)| !r.revealed)
            .map(|(index, r)| {
                r.revealed = true;
                (RevealId(index), effect_for(r.target, 0))
            })
            .collect()
    }
}

fn effect_for(target: RevealTarget, stagger_ms: u32) -> RevealEffect {
    match target {
        RevealTarget::Marker => RevealEffect::AddMarker,
        RevealTarget::Bar { percent } => RevealEffect::FillBar {
            percent,
            delay_ms: stagger_ms,
        },
    }
}

/// Parses a `data-percent` attribute value.
///
/// Reads an optional sign and the leading decimal digits, ignoring anything
/// after them. Missing or unparsable input yields 0; the result is clamped
/// to `0..=100`.
pub fn parse_percent(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end]
        .parse::<u64>()
        .map(|n| n.min(100) as u8)
        .unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIBLE: Visibility = Visibility {
        is_intersecting: true,
    };
    const HIDDEN: Visibility = Visibility {
        is_intersecting: false,
    };

    #[test]
    fn test_thresholds() {
        assert_eq!(RevealKind::Reveal.threshold(), 0.14);
        assert_eq!(RevealKind::Progress.threshold(), 0.18);
        assert_eq!(RevealKind::Timeline.threshold(), 0.18);
    }

    #[test]
    fn test_fires_exactly_once_across_reentries() {
        let mut watcher = RevealWatcher::new(RevealKind::Reveal);
        let id = watcher.register(RevealTarget::Marker);

        let mut fired = 0;
        for visibility in [HIDDEN, VISIBLE, HIDDEN, VISIBLE, VISIBLE, HIDDEN, VISIBLE] {
            if watcher.on_visibility(id, visibility).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(watcher.is_revealed(id));
        assert_eq!(watcher.pending(), 0);
    }

    #[test]
    fn test_hidden_report_does_not_fire() {
        let mut watcher = RevealWatcher::new(RevealKind::Timeline);
        let id = watcher.register(RevealTarget::Marker);
        assert_eq!(watcher.on_visibility(id, HIDDEN), None);
        assert!(!watcher.is_revealed(id));
    }

    #[test]
    fn test_progress_fill_is_staggered() {
        let mut watcher = RevealWatcher::new(RevealKind::Progress);
        let id = watcher.register(RevealTarget::Bar { percent: 85 });
        assert_eq!(
            watcher.on_visibility(id, VISIBLE),
            Some(RevealEffect::FillBar {
                percent: 85,
                delay_ms: 120
            })
        );
    }

    #[test]
    fn test_reveal_all_is_immediate_and_skips_revealed() {
        let mut watcher = RevealWatcher::new(RevealKind::Progress);
        let a = watcher.register(RevealTarget::Bar { percent: 40 });
        let b = watcher.register(RevealTarget::Bar { percent: 90 });
        watcher.on_visibility(a, VISIBLE);

        let effects = watcher.reveal_all();
        assert_eq!(
            effects,
            vec![(
                b,
                RevealEffect::FillBar {
                    percent: 90,
                    delay_ms: 0
                }
            )]
        );
        assert!(watcher.reveal_all().is_empty());
        assert_eq!(watcher.on_visibility(b, VISIBLE), None);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut watcher = RevealWatcher::new(RevealKind::Reveal);
        let mut other = RevealWatcher::new(RevealKind::Reveal);
        other.register(RevealTarget::Marker);
        let foreign = other.register(RevealTarget::Marker);
        assert_eq!(watcher.on_visibility(foreign, VISIBLE), None);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent(Some("85")), 85);
        assert_eq!(parse_percent(Some(" 70%")), 70);
        assert_eq!(parse_percent(Some("42.9")), 42);
        assert_eq!(parse_percent(Some("+12")), 12);
        assert_eq!(parse_percent(Some("250")), 100);
        assert_eq!(parse_percent(Some("99999999999999999999999")), 100);
        assert_eq!(parse_percent(Some("-5")), 0);
        assert_eq!(parse_percent(Some("abc")), 0);
        assert_eq!(parse_percent(Some("")), 0);
        assert_eq!(parse_percent(None), 0);
    }
}
