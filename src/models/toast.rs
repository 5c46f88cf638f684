use crate::config::toast::DEFAULT_DURATION_MS;

/// Visual category of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
}

impl ToastKind {
    /// Background gradient for this kind.
    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => {
                "linear-gradient(90deg, rgba(43,123,211,0.12), rgba(255,209,102,0.08))"
            }
            ToastKind::Warning => {
                "linear-gradient(90deg, rgba(255,209,102,0.12), rgba(43,123,211,0.04))"
            }
            ToastKind::Info => {
                "linear-gradient(90deg, rgba(43,123,211,0.06), rgba(255,209,102,0.04))"
            }
        }
    }

    /// Text color for this kind.
    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Warning => "#18232b",
            ToastKind::Success | ToastKind::Info => "#082043",
        }
    }
}

/// Options accepted by `show_toast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    pub duration_ms: u32,
    pub kind: ToastKind,
}

impl ToastOptions {
    pub fn kind(kind: ToastKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            kind: ToastKind::Info,
        }
    }
}
