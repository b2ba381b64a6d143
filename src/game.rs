use rand::Rng;

use crate::bird::Bird;
use crate::constants::{BIRD_SIDE, PIPE_D, PIPE_START_X, WIN_W};
use crate::frame::Frame;
use crate::pipes::{PipeChain, PipeFactory};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Play,
}

/// Things that happened during one tick, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// The bird went from alive to dead.
    Died,
    /// The score was incremented to the carried value.
    Scored(u32),
    PipeSpawned { x: i32, gap_top: i32 },
    /// Offscreen pipes dropped from the head of the chain.
    Evicted(usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub frame: Frame,
    pub events: Vec<TickEvent>,
}

/// The whole simulation: menu/play state, the bird, the pipe chain and the
/// score. Every step is a deterministic function of the previous state, the
/// clicks since the last tick and the draws taken from `R`.
#[derive(Debug)]
pub struct Game<R> {
    screen: Screen,
    alive: bool,
    score: u32,
    bird: Bird,
    chain: PipeChain,
    factory: PipeFactory<R>,
}

impl<R: Rng> Game<R> {
    pub fn new(rng: R) -> Self {
        let mut factory = PipeFactory::new(rng);
        let chain = PipeChain::new(factory.make_pipe(PIPE_START_X));
        Self {
            screen: Screen::Menu,
            alive: true,
            score: 0,
            bird: Bird::default(),
            chain,
            factory,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipeChain {
        &self.chain
    }

    /// Direct access for setting up positions, e.g. in tests or replays.
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes_mut(&mut self) -> &mut PipeChain {
        &mut self.chain
    }

    /// A click starts a session from the menu, otherwise it flaps. Dead birds
    /// flap too.
    pub fn on_click(&mut self) {
        match self.screen {
            Screen::Menu => {
                self.reset();
                self.screen = Screen::Play;
                log::info!("session started");
            }
            Screen::Play => self.bird.flap(),
        }
    }

    /// Ends the current session. The next click starts a fresh one.
    pub fn return_to_menu(&mut self) {
        if self.screen == Screen::Play {
            log::info!("session ended with score {}", self.score);
        }
        self.screen = Screen::Menu;
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.screen {
            Screen::Menu => {
                self.reset();
                TickOutcome::default()
            }
            Screen::Play => self.play_tick(),
        }
    }

    fn reset(&mut self) {
        self.bird.reset();
        self.alive = true;
        self.score = 0;
        self.chain = PipeChain::new(self.factory.make_pipe(PIPE_START_X));
    }

    fn play_tick(&mut self) -> TickOutcome {
        let mut out = TickOutcome::default();

        self.bird.accelerate();
        self.bird.advance();
        let bird_rect = self.bird.rect();

        // Pipes appended here are visited by this same pass.
        let mut i = 0;
        while let Some(pipe) = self.chain.get_mut(i) {
            pipe.scroll();
            let pipe = *pipe;

            if pipe.hits(&bird_rect) && self.alive {
                self.alive = false;
                log::info!("bird hit pipe at x={} with score {}", pipe.x, self.score);
                out.events.push(TickEvent::Died);
            }
            out.frame.push_pipe(&pipe);

            if i + 1 == self.chain.len() && pipe.x < WIN_W - PIPE_D {
                let next = self.factory.make_pipe(pipe.x + PIPE_D);
                log::debug!("spawned pipe at x={} gap_top={}", next.x, next.gap_top);
                self.chain.push(next);
                out.events.push(TickEvent::PipeSpawned {
                    x: next.x,
                    gap_top: next.gap_top,
                });
            }
            i += 1;
        }

        out.frame.push_bird(bird_rect);

        if self.alive && self.crossed_next_pipe() {
            self.score += 1;
            log::info!("score {}", self.score);
            out.events.push(TickEvent::Scored(self.score));
            if let Some(next) = self.chain.advance_cursor(&mut self.factory) {
                out.events.push(TickEvent::PipeSpawned {
                    x: next.x,
                    gap_top: next.gap_top,
                });
            }
        }

        let evicted = self.chain.evict_offscreen(self.alive);
        if evicted > 0 {
            out.events.push(TickEvent::Evicted(evicted));
        }

        out
    }

    fn crossed_next_pipe(&self) -> bool {
        self.chain
            .next_to_score()
            .is_some_and(|pipe| self.bird.x() + BIRD_SIDE >= pipe.x)
    }
}
