//! The per-tick list of colored rectangles and the renderer seam it is drawn
//! through.

use std::io;

use crate::constants::{BACKGROUND, BIRD_COLOR, PIPE_COLOR};
use crate::geometry::{Rect, Rgb};
use crate::pipes::Pipe;

/// Status overlay drawn on top of a frame by surfaces that can show it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hud {
    Menu,
    Score(u32),
}

/// Anything that can display filled rectangles. Fills accumulate until
/// `present` makes them visible.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn present(&mut self) -> io::Result<()>;

    fn draw_hud(&mut self, _hud: Hud) {}

    /// New display size in character cells or pixels, as the surface sees it.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fill {
    pub rect: Rect,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub background: Rgb,
    pub fills: Vec<Fill>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            fills: Vec::new(),
        }
    }
}

impl Frame {
    pub fn push_pipe(&mut self, pipe: &Pipe) {
        self.fills.push(Fill {
            rect: pipe.top(),
            color: PIPE_COLOR,
        });
        self.fills.push(Fill {
            rect: pipe.bottom(),
            color: PIPE_COLOR,
        });
    }

    pub fn push_bird(&mut self, rect: Rect) {
        self.fills.push(Fill {
            rect,
            color: BIRD_COLOR,
        });
    }

    /// Clears the surface and replays every fill in order. Presenting is left
    /// to the caller so overlays can be added on top.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.clear();
        for fill in &self.fills {
            surface.fill_rect(fill.rect, fill.color);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    pub(crate) enum Call {
        Clear,
        Fill(Rect, Rgb),
        Hud(Hud),
        Present,
    }

    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgb) {
            self.calls.push(Call::Fill(rect, color));
        }

        fn present(&mut self) -> io::Result<()> {
            self.calls.push(Call::Present);
            Ok(())
        }

        fn draw_hud(&mut self, hud: Hud) {
            self.calls.push(Call::Hud(hud));
        }
    }

    #[test]
    fn test_pipes_then_bird_in_order() {
        let mut frame = Frame::default();
        frame.push_pipe(&Pipe { x: 150, gap_top: 200 });
        frame.push_bird(Rect::new(100, 88, 25, 25));

        let mut surface = RecordingSurface::default();
        frame.draw(&mut surface);

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear,
                Call::Fill(Rect::new(150, 0, 50, 200), Rgb(0, 127, 0)),
                Call::Fill(Rect::new(150, 350, 50, 250), Rgb(0, 127, 0)),
                Call::Fill(Rect::new(100, 88, 25, 25), Rgb(255, 255, 255)),
            ]
        );
    }

    #[test]
    fn test_empty_frame_only_clears() {
        let mut surface = RecordingSurface::default();
        Frame::default().draw(&mut surface);
        assert_eq!(surface.calls, vec![Call::Clear]);
    }
}
