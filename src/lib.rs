//! A Flappy Bird clone: a fixed-timestep simulation that turns clicks into a
//! list of colored rectangles, plus a crossterm front end to play it in a
//! terminal.

pub mod bird;
pub mod constants;
pub mod diagnostics;
pub mod frame;
pub mod game;
pub mod geometry;
pub mod input;
pub mod pacer;
pub mod pipes;
pub mod scheduler;
pub mod term;

pub use game::{Game, Screen, TickEvent, TickOutcome};
