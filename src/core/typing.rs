//! Hero typing animation state machine.
//!
//! The animator types a phrase one character at a time, holds it, erases it
//! and moves on to the next phrase, forever. Each call to
//! [`TypingMachine::step`] performs one transition and returns the text to
//! display together with the delay before the next call.

use crate::config::typing;

/// Current phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Pausing,
    Erasing,
}

/// Cadence of the animation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypingTiming {
    pub initial_delay: u32,
    pub type_base: u32,
    pub type_jitter: f64,
    pub pause: u32,
    pub erase_base: u32,
    pub erase_jitter: f64,
    pub next_phrase: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            initial_delay: typing::INITIAL_DELAY,
            type_base: typing::TYPE_BASE,
            type_jitter: typing::TYPE_JITTER,
            pause: typing::PAUSE,
            erase_base: typing::ERASE_BASE,
            erase_jitter: typing::ERASE_JITTER,
            next_phrase: typing::NEXT_PHRASE,
        }
    }
}

/// Output of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text the typing target should show now.
    pub text: String,
    /// Delay before the next `step`.
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingMachine {
    phrases: Vec<Vec<char>>,
    timing: TypingTiming,
    phrase_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl TypingMachine {
    /// Returns `None` when there is nothing to animate.
    pub fn new<S: AsRef<str>>(phrases: &[S], timing: TypingTiming) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            timing,
            phrase_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        })
    }

    /// Text shown when motion is disabled: the first phrase, verbatim.
    pub fn static_text(&self) -> String {
        self.phrases[0].iter().collect()
    }

    pub fn initial_delay(&self) -> u32 {
        self.timing.initial_delay
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// Advances the machine by one transition.
    ///
    /// `jitter` is a sample in `[0, 1)` scaled by the phase's jitter range.
    pub fn step(&mut self, jitter: f64) -> Tick {
        let jitter = jitter.clamp(0.0, 1.0);
        let delay_ms = match self.phase {
            TypingPhase::Typing => {
                if self.char_index < self.current().len() {
                    self.char_index += 1;
                    with_jitter(self.timing.type_base, self.timing.type_jitter, jitter)
                } else {
                    self.phase = TypingPhase::Pausing;
                    self.timing.pause
                }
            }
            TypingPhase::Pausing => {
                self.phase = TypingPhase::Erasing;
                self.erase(jitter)
            }
            TypingPhase::Erasing => self.erase(jitter),
        };

        Tick {
            text: self.current()[..self.char_index].iter().collect(),
            delay_ms,
        }
    }

    fn erase(&mut self, jitter: f64) -> u32 {
        if self.char_index > 0 {
            self.char_index -= 1;
            with_jitter(self.timing.erase_base, self.timing.erase_jitter, jitter)
        } else {
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.phase = TypingPhase::Typing;
            self.timing.next_phrase
        }
    }

    fn current(&self) -> &[char] {
        &self.phrases[self.phrase_index]
    }
}

fn with_jitter(base: u32, range: f64, sample: f64) -> u32 {
    base + (range * sample).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(phrases: &[&str]) -> TypingMachine {
        TypingMachine::new(phrases, TypingTiming::default()).unwrap()
    }

    #[test]
    fn test_empty_phrases_disable_animator() {
        let phrases: [&str; 0] = [];
        assert!(TypingMachine::new(&phrases, TypingTiming::default()).is_none());
    }

    #[test]
    fn test_static_text_is_first_phrase() {
        let m = machine(&["Passionate Web Developer.", "UI/UX Enthusiast."]);
        assert_eq!(m.static_text(), "Passionate Web Developer.");
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut m = machine(&["abc"]);
        assert_eq!(m.step(0.0), Tick { text: "a".into(), delay_ms: 60 });
        assert_eq!(m.step(0.0).text, "ab");
        assert_eq!(m.step(0.0).text, "abc");
        assert_eq!(m.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_jitter_scales_delay() {
        let mut m = machine(&["ab"]);
        assert_eq!(m.step(0.5).delay_ms, 60 + 12);
        assert_eq!(m.step(0.999).delay_ms, 60 + 24);
    }

    #[test]
    fn test_full_cycle_wraps_to_first_phrase() {
        let mut m = machine(&["ab", "c"]);
        m.step(0.0);
        m.step(0.0);

        let pause = m.step(0.0);
        assert_eq!(pause, Tick { text: "ab".into(), delay_ms: 1200 });
        assert_eq!(m.phase(), TypingPhase::Pausing);

        let first_erase = m.step(0.0);
        assert_eq!(first_erase, Tick { text: "a".into(), delay_ms: 30 });
        assert_eq!(m.phase(), TypingPhase::Erasing);
        assert_eq!(m.step(0.0).text, "");

        let advance = m.step(0.0);
        assert_eq!(advance, Tick { text: "".into(), delay_ms: 420 });
        assert_eq!(m.phrase_index(), 1);
        assert_eq!(m.phase(), TypingPhase::Typing);

        assert_eq!(m.step(0.0).text, "c");
        m.step(0.0);
        m.step(0.0);
        m.step(0.0);
        assert_eq!(m.phrase_index(), 0);
        assert_eq!(m.step(0.0).text, "a");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut m = machine(&["héllo ✨"]);
        let mut last = String::new();
        for _ in 0..7 {
            last = m.step(0.0).text;
        }
        assert_eq!(last, "héllo ✨");
        assert_eq!(m.char_index(), 7);
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut m = machine(&["", "x"]);
        assert_eq!(m.step(0.0).delay_ms, 1200);
        assert_eq!(m.step(0.0).delay_ms, 420);
        assert_eq!(m.step(0.0).text, "x");
    }
}
