//! Pipe obstacles, the random pipe factory and the scrolling pipe chain.

use std::collections::VecDeque;

use rand::Rng;

use crate::constants::{GAP_H, GAP_TOP_MAX, GAP_TOP_MIN, PIPE_D, PIPE_V, PIPE_W, WIN_H};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipe {
    /// Left edge.
    pub x: i32,
    /// Top of the opening.
    pub gap_top: i32,
}

impl Pipe {
    pub fn top(&self) -> Rect {
        Rect::new(self.x, 0, PIPE_W, self.gap_top)
    }

    pub fn bottom(&self) -> Rect {
        let y = self.gap_top + GAP_H;
        Rect::new(self.x, y, PIPE_W, WIN_H - y)
    }

    pub fn hits(&self, bird: &Rect) -> bool {
        bird.intersects(&self.top()) || bird.intersects(&self.bottom())
    }

    pub fn scroll(&mut self) {
        self.x += PIPE_V;
    }

    pub fn is_offscreen(&self) -> bool {
        self.x + PIPE_W < 0
    }
}

// ── Factory ─────────────────────────────────────────────────────────────────

/// Produces pipes with a uniformly drawn gap position. The generator is
/// seeded once by the caller and lives as long as the game.
#[derive(Debug)]
pub struct PipeFactory<R> {
    rng: R,
}

impl<R: Rng> PipeFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn make_pipe(&mut self, x: i32) -> Pipe {
        Pipe {
            x,
            gap_top: self.rng.gen_range(GAP_TOP_MIN..GAP_TOP_MAX),
        }
    }
}

// ── Chain ───────────────────────────────────────────────────────────────────

/// Live pipes, oldest first, plus the index of the next pipe to be scored.
///
/// The cursor is an index rather than a reference so that evicting from the
/// head only needs to shift it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipeChain {
    pipes: VecDeque<Pipe>,
    cursor: usize,
}

impl PipeChain {
    pub fn new(first: Pipe) -> Self {
        Self {
            pipes: VecDeque::from([first]),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Pipe> {
        self.pipes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Pipe> {
        self.pipes.get_mut(index)
    }

    pub fn head(&self) -> Option<&Pipe> {
        self.pipes.front()
    }

    pub fn tail(&self) -> Option<&Pipe> {
        self.pipes.back()
    }

    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The next pipe the bird has to cross to score.
    pub fn next_to_score(&self) -> Option<&Pipe> {
        self.pipes.get(self.cursor)
    }

    /// Moves the cursor onto its successor, appending one `PIPE_D` further
    /// right if the chain ends at the cursor. Returns the appended pipe.
    pub fn advance_cursor<R: Rng>(&mut self, factory: &mut PipeFactory<R>) -> Option<Pipe> {
        let mut appended = None;
        if self.cursor + 1 >= self.pipes.len() {
            if let Some(current) = self.pipes.get(self.cursor) {
                let pipe = factory.make_pipe(current.x + PIPE_D);
                self.pipes.push_back(pipe);
                appended = Some(pipe);
            }
        }
        self.cursor += 1;
        appended
    }

    /// Drops head pipes that have left the viewport. With `scoring` set, only
    /// pipes the cursor has already passed are dropped.
    pub fn evict_offscreen(&mut self, scoring: bool) -> usize {
        let mut evicted = 0;
        while let Some(head) = self.pipes.front() {
            if !head.is_offscreen() || (scoring && self.cursor == 0) {
                break;
            }
            self.pipes.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
            evicted += 1;
        }
        evicted
    }
}
