//! Singleton toast notification lifecycle.
//!
//! At most one toast exists. Showing a new message while one is displayed
//! replaces its text and restarts the countdown. Every show bumps a
//! generation counter; timers carry the generation they were scheduled for
//! and are ignored once it is stale, so an old dismissal can never remove a
//! newer message.

use crate::models::{ToastKind, ToastOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached with its offset/transparent style; animates in next frame.
    Entering,
    Visible,
    /// Animating out; detached once the transition finishes.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
    pub generation: u64,
}

/// Owner of the single toast slot.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Shows `text`, reusing the live toast if there is one.
    ///
    /// Returns the generation the caller must pass to the follow-up
    /// transitions.
    pub fn show(&mut self, text: impl Into<String>, options: ToastOptions) -> u64 {
        self.generation += 1;
        let phase = match &self.current {
            // Already on screen: keep it there while the text changes.
            Some(toast) if toast.phase == ToastPhase::Visible => ToastPhase::Visible,
            _ => ToastPhase::Entering,
        };
        self.current = Some(Toast {
            text: text.into(),
            kind: options.kind,
            phase,
            generation: self.generation,
        });
        self.generation
    }

    /// Next paint frame after `show`: animate in.
    pub fn enter(&mut self, generation: u64) -> bool {
        self.transition(generation, ToastPhase::Visible)
    }

    /// Display duration elapsed: animate out.
    pub fn leave(&mut self, generation: u64) -> bool {
        self.transition(generation, ToastPhase::Leaving)
    }

    /// Leave transition finished: detach the element.
    pub fn remove(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation && toast.phase == ToastPhase::Leaving => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    fn transition(&mut self, generation: u64, phase: ToastPhase) -> bool {
        match &mut self.current {
            Some(toast) if toast.generation == generation => {
                toast.phase = phase;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut slot = ToastSlot::new();
        let generation = slot.show("Saved", ToastOptions::default());
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Entering);

        assert!(slot.enter(generation));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Visible);

        assert!(slot.leave(generation));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);

        assert!(slot.remove(generation));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_second_show_replaces_first() {
        let mut slot = ToastSlot::new();
        let first = slot.show("first", ToastOptions::kind(ToastKind::Warning));
        slot.enter(first);
        let second = slot.show("second", ToastOptions::kind(ToastKind::Success));

        let toast = slot.current().unwrap();
        assert_eq!(toast.text, "second");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.phase, ToastPhase::Visible);

        // The first toast's timers are stale.
        assert!(!slot.leave(first));
        assert!(!slot.remove(first));
        assert_eq!(slot.current().unwrap().text, "second");

        assert!(slot.leave(second));
        assert!(slot.remove(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_show_during_leave_re_enters() {
        let mut slot = ToastSlot::new();
        let first = slot.show("first", ToastOptions::default());
        slot.enter(first);
        slot.leave(first);

        let second = slot.show("second", ToastOptions::default());
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Entering);
        assert!(!slot.remove(first));
        assert!(slot.enter(second));
    }

    #[test]
    fn test_remove_requires_leaving() {
        let mut slot = ToastSlot::new();
        let generation = slot.show("hi", ToastOptions::default());
        assert!(!slot.remove(generation));
        assert!(slot.current().is_some());
    }
}
