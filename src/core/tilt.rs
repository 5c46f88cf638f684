//! Pointer-driven tilt transform.

use crate::config::tilt;

/// Bounding box of a hovered element, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Per-element hover session.
///
/// The bounding box is measured on the first move and reused until the
/// pointer leaves, so layout shifts are picked up on the next hover.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltSession {
    rect: Option<Rect>,
}

impl TiltSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_cached_rect(&self) -> bool {
        self.rect.is_some()
    }

    /// Returns the CSS transform for a pointer at (`x`, `y`).
    ///
    /// `measure` is only called when no box is cached.
    pub fn on_move(&mut self, x: f64, y: f64, measure: impl FnOnce() -> Rect) -> Option<String> {
        let rect = *self.rect.get_or_insert_with(measure);
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let px = ((x - rect.left) / rect.width).clamp(0.0, 1.0);
        let py = ((y - rect.top) / rect.height).clamp(0.0, 1.0);
        Some(transform(px, py))
    }

    /// Pointer left: drop the cached box. The caller clears the transform.
    pub fn on_leave(&mut self) {
        self.rect = None;
    }
}

/// Transform for normalized pointer position (`px`, `py`) in `[0, 1]`.
pub fn transform(px: f64, py: f64) -> String {
    let rotate_y = (px - 0.5) * tilt::ROTATION_SCALE_DEG;
    let rotate_x = (0.5 - py) * tilt::ROTATION_SCALE_DEG;
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{}px) scale({})",
        tilt::PERSPECTIVE_PX,
        rotate_x,
        rotate_y,
        tilt::LIFT_PX,
        tilt::SCALE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_center_is_flat() {
        assert_eq!(
            transform(0.5, 0.5),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg) translateY(-6px) scale(1.01)"
        );
    }

    #[test]
    fn test_corners_tilt_half_the_rotation_scale() {
        assert_eq!(
            transform(1.0, 0.0),
            "perspective(900px) rotateX(4.00deg) rotateY(4.00deg) translateY(-6px) scale(1.01)"
        );
        assert_eq!(
            transform(0.0, 1.0),
            "perspective(900px) rotateX(-4.00deg) rotateY(-4.00deg) translateY(-6px) scale(1.01)"
        );
    }

    #[test]
    fn test_edge_rotation_is_half_the_scale() {
        let edge = tilt::ROTATION_SCALE_DEG / 2.0;
        assert!(transform(1.0, 0.5).contains(&format!("rotateY({edge:.2}deg)")));
        assert!(transform(0.5, 0.0).contains(&format!("rotateX({edge:.2}deg)")));
    }

    #[test]
    fn test_rect_is_measured_once_per_hover() {
        let mut session = TiltSession::new();
        let mut measured = 0;

        session.on_move(200.0, 100.0, || {
            measured += 1;
            CARD
        });
        session.on_move(250.0, 60.0, || {
            measured += 1;
            CARD
        });
        assert_eq!(measured, 1);

        session.on_leave();
        assert!(!session.has_cached_rect());
        session.on_move(200.0, 100.0, || {
            measured += 1;
            CARD
        });
        assert_eq!(measured, 2);
    }

    #[test]
    fn test_pointer_outside_is_clamped() {
        let mut session = TiltSession::new();
        let far = session.on_move(10_000.0, -500.0, || CARD);
        assert_eq!(far, Some(transform(1.0, 0.0)));
    }

    #[test]
    fn test_zero_sized_rect_has_no_transform() {
        let mut session = TiltSession::new();
        let empty = Rect {
            width: 0.0,
            ..CARD
        };
        assert_eq!(session.on_move(0.0, 0.0, || empty), None);
    }
}
