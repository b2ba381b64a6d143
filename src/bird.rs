use crate::constants::{
    BIRD_A, BIRD_SIDE, BIRD_START_V, BIRD_START_X, BIRD_START_Y, CLICK_V, MAX_V,
};
use crate::geometry::Rect;

/// The player avatar. Only the vertical axis moves; x is fixed at
/// [`BIRD_START_X`].
///
/// `y` keeps sub-pixel precision and is truncated to whole pixels only when
/// the bird is turned into a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub y: f64,
    pub v: f64,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y as f64,
            v: BIRD_START_V,
        }
    }
}

impl Bird {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn flap(&mut self) {
        self.v = CLICK_V;
    }

    /// Gravity first, clamped to terminal velocity on the way down only.
    pub fn accelerate(&mut self) {
        self.v = (self.v + BIRD_A).min(MAX_V);
    }

    pub fn advance(&mut self) {
        self.y += self.v;
    }

    pub fn pixel_y(&self) -> i32 {
        self.y as i32
    }

    pub fn x(&self) -> i32 {
        BIRD_START_X
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(BIRD_START_X, self.pixel_y(), BIRD_SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accumulates_until_terminal_velocity() {
        let mut bird = Bird::default();
        let mut prev = bird.v;
        for _ in 0..100 {
            bird.accelerate();
            assert!(bird.v <= MAX_V);
            assert!(bird.v >= prev);
            prev = bird.v;
        }
        assert_eq!(bird.v, MAX_V);
    }

    #[test]
    fn test_flap_sets_exact_velocity() {
        let mut bird = Bird { y: 300.0, v: -20.0 };
        bird.flap();
        assert_eq!(bird.v, CLICK_V);
        bird.v = 8.0;
        bird.flap();
        assert_eq!(bird.v, CLICK_V);
    }

    #[test]
    fn test_no_upward_clamp() {
        let mut bird = Bird { y: 300.0, v: -50.0 };
        bird.accelerate();
        assert!((bird.v - (-49.7)).abs() < 1e-9);
    }

    #[test]
    fn test_advance_keeps_fraction() {
        let mut bird = Bird { y: 300.0, v: 0.3 };
        bird.advance();
        bird.advance();
        bird.advance();
        assert!((bird.y - 300.9).abs() < 1e-9);
        assert_eq!(bird.pixel_y(), 300);
    }

    #[test]
    fn test_pixel_y_truncates_toward_zero() {
        assert_eq!(Bird { y: 293.7, v: 0.0 }.pixel_y(), 293);
        assert_eq!(Bird { y: -3.5, v: 0.0 }.pixel_y(), -3);
    }

    #[test]
    fn test_rect_is_centered_on_spawn_column() {
        let bird = Bird { y: 100.0, v: 0.0 };
        assert_eq!(bird.rect(), Rect::new(100, 88, 25, 25));
        let bird = Bird { y: 100.9, v: 0.0 };
        assert_eq!(bird.rect(), Rect::new(100, 88, 25, 25));
    }
}
