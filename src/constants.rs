use std::time::Duration;

use crate::geometry::Rgb;

// ── Viewport ────────────────────────────────────────────────────────────────

pub const WIN_W: i32 = 450;
pub const WIN_H: i32 = 600;
pub const WINDOW_TITLE: &str = "Flappy Bird";

pub const FRAME_LENGTH: Duration = Duration::from_millis(16);

// ── Bird ────────────────────────────────────────────────────────────────────

/// Side length of the square bird, used for drawing, collision and scoring.
pub const BIRD_SIDE: i32 = 25;
pub const BIRD_A: f64 = 0.3;
pub const CLICK_V: f64 = -7.0;
pub const MAX_V: f64 = 10.0;
pub const BIRD_START_X: i32 = WIN_W / 4;
pub const BIRD_START_Y: i32 = WIN_H / 2;
pub const BIRD_START_V: f64 = 0.0;

// ── Pipes ───────────────────────────────────────────────────────────────────

pub const PIPE_W: i32 = 50;
pub const GAP_H: i32 = 150;
pub const GAP_TOP_MIN: i32 = 20;
pub const GAP_TOP_MAX: i32 = 380;
pub const PIPE_START_X: i32 = 400;
/// Distance from the left edge of one pipe to the left edge of the next.
pub const PIPE_D: i32 = 300;
/// Horizontal pipe speed per tick (negative scrolls left).
pub const PIPE_V: i32 = -8;

// ── Colors ──────────────────────────────────────────────────────────────────

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const PIPE_COLOR: Rgb = Rgb(0, 127, 0);
pub const BIRD_COLOR: Rgb = Rgb(255, 255, 255);
pub const SCORE_COLOR: Rgb = Rgb(255, 255, 255);
pub const SHADOW: Rgb = Rgb(30, 30, 30);
