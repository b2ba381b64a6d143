//! The single-threaded hot loop: drain input, maybe tick, maybe render.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::Rng;

use crate::diagnostics::Diagnostics;
use crate::frame::{Hud, Surface};
use crate::game::{Game, Screen};
use crate::input::{Input, InputSource};
use crate::pacer::FramePacer;

pub trait Clock {
    fn now(&mut self) -> Instant;
}

/// Wall time from [`Instant`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}

/// Runs `game` until a quit input arrives and returns the number of ticks
/// simulated.
///
/// Input is polled on every pass. A quit still lets the rest of its batch and
/// that pass's tick run; the loop stops at the next pass boundary.
pub fn run<R, I, S, W, C>(
    game: &mut Game<R>,
    input: &mut I,
    surface: &mut S,
    diagnostics: &mut Diagnostics<W>,
    clock: &mut C,
    frame: Duration,
) -> io::Result<u64>
where
    R: Rng,
    I: InputSource,
    S: Surface,
    W: Write,
    C: Clock,
{
    let mut pacer = FramePacer::new(frame, clock.now());
    let mut ticks = 0;
    let mut running = true;

    while running {
        let batch = input.poll(pacer.until_next(clock.now()))?;
        for event in batch {
            match event {
                Input::Quit => running = false,
                Input::Click => game.on_click(),
                Input::Menu => game.return_to_menu(),
            }
        }
        if let Some((cols, rows)) = input.take_resize() {
            surface.resize(cols, rows);
        }

        if pacer.poll(clock.now()) {
            let outcome = game.tick();
            ticks += 1;
            diagnostics.record(&outcome.events)?;

            outcome.frame.draw(surface);
            surface.draw_hud(match game.screen() {
                Screen::Menu => Hud::Menu,
                Screen::Play => Hud::Score(game.score()),
            });
            surface.present()?;
        }
    }

    log::info!("stopped after {ticks} ticks");
    Ok(ticks)
}
