use std::io::{self, Write};

use color_eyre::eyre::{Result, WrapErr};
use rand::{SeedableRng, rngs::StdRng};

use flappy_rect::Game;
use flappy_rect::constants::FRAME_LENGTH;
use flappy_rect::diagnostics::Diagnostics;
use flappy_rect::scheduler::{self, MonotonicClock};
use flappy_rect::term::{Terminal, TerminalInput, TerminalSurface};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // stdout belongs to the game screen until the terminal is restored, so
    // death and score lines are held back and printed afterwards.
    let mut diagnostics = Diagnostics::new(Vec::new());
    let result = play(&mut diagnostics);
    io::stdout().write_all(&diagnostics.into_inner())?;
    result
}

fn play(diagnostics: &mut Diagnostics<Vec<u8>>) -> Result<()> {
    let term = Terminal::enter().wrap_err("failed to initialise terminal")?;
    let (cols, rows) = term.size().wrap_err("failed to read terminal size")?;
    log::info!("terminal is {cols}x{rows}");

    let mut surface = TerminalSurface::new(io::stdout(), cols, rows);
    let mut input = TerminalInput::default();
    let mut game = Game::new(StdRng::from_entropy());

    scheduler::run(
        &mut game,
        &mut input,
        &mut surface,
        diagnostics,
        &mut MonotonicClock,
        FRAME_LENGTH,
    )
    .wrap_err("game loop failed")?;

    drop(term);
    Ok(())
}
