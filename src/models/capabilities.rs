/// Environment signals read once at startup.
///
/// Components branch on this descriptor instead of probing the browser
/// themselves, so tests can construct any combination directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// The user asked for minimized animation.
    pub reduced_motion: bool,
    /// `IntersectionObserver` is available.
    pub intersection_observer: bool,
    /// The OS reports a dark color scheme.
    pub prefers_dark: bool,
}

impl Capabilities {
    /// Full-featured environment with no user preferences set.
    pub fn full() -> Self {
        Self {
            reduced_motion: false,
            intersection_observer: true,
            prefers_dark: false,
        }
    }

    /// Whether viewport-driven animations should run at all.
    ///
    /// Without an observer, or with reduced motion, everything is revealed
    /// immediately instead.
    pub fn animate_reveals(&self) -> bool {
        self.intersection_observer && !self.reduced_motion
    }

    /// Whether pointer tilt and typing animations should run.
    pub fn animate_motion(&self) -> bool {
        !self.reduced_motion
    }
}
