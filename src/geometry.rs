//! Pixel-space rectangles and colors shared by the simulation and renderers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle covering `[x, x + w) x [y, y + h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `side` centered on `(cx, cy)`, rounding the corner
    /// toward the top-left for even halves.
    pub const fn centered(cx: i32, cy: i32, side: i32) -> Self {
        Self::new(cx - side / 2, cy - side / 2, side, side)
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// The part of `self` inside `bounds`, or `None` if they do not overlap.
    pub fn clip(&self, bounds: &Rect) -> Option<Rect> {
        if !self.intersects(bounds) {
            return None;
        }
        let x = self.x.max(bounds.x);
        let y = self.y.max(bounds.y);
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());
        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// Half-open overlap test; empty rectangles never intersect anything.
    pub const fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        overlaps(self.x, self.right(), other.x, other.right())
            && overlaps(self.y, self.bottom(), other.y, other.bottom())
    }
}

const fn overlaps(a0: i32, a1: i32, b0: i32, b1: i32) -> bool {
    a0 < b1 && b0 < a1
}
