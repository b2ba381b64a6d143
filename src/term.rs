//! Terminal renderer and input source built on crossterm.
//!
//! The 450x600 world is letterboxed into a pixel grid two pixels per
//! character cell tall and drawn with upper-half-block glyphs.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute, queue,
    style::{self, Color as CColor},
    terminal,
};

use crate::constants::{
    BACKGROUND, BIRD_COLOR, BIRD_SIDE, BIRD_START_X, BIRD_START_Y, SCORE_COLOR, SHADOW, WIN_H,
    WIN_W, WINDOW_TITLE,
};
use crate::frame::{Hud, Surface};
use crate::geometry::{Rect, Rgb};
use crate::input::{self, Input, InputSource};

const LETTERBOX: Rgb = Rgb(24, 24, 24);

// ── Pixel buffer ────────────────────────────────────────────────────────────

#[derive(Debug)]
struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![LETTERBOX; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, LETTERBOX);
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn fill(&mut self, r: Rect, c: Rgb) {
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                self.set(x, y, c);
            }
        }
    }

    /// Prints the buffer two pixel rows per line. Colors are only re-sent when
    /// they change along a line.
    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        for row in 0..rows {
            let mut pen = Pen::default();
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);
                if top == bot {
                    pen.background(out, top)?;
                    queue!(out, style::Print(' '))?;
                } else {
                    pen.foreground(out, top)?;
                    pen.background(out, bot)?;
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            queue!(out, style::ResetColor)?;
            if row + 1 < rows {
                queue!(out, style::Print("\r\n"))?;
            }
        }
        out.flush()
    }
}

#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Pen {
    fn foreground(&mut self, out: &mut impl Write, c: Rgb) -> io::Result<()> {
        if self.fg != Some(c) {
            queue!(out, style::SetForegroundColor(to_color(c)))?;
            self.fg = Some(c);
        }
        Ok(())
    }

    fn background(&mut self, out: &mut impl Write, c: Rgb) -> io::Result<()> {
        if self.bg != Some(c) {
            queue!(out, style::SetBackgroundColor(to_color(c)))?;
            self.bg = Some(c);
        }
        Ok(())
    }
}

fn to_color(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Viewport mapping ────────────────────────────────────────────────────────

/// Where the world lands inside the pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    ox: i32,
    oy: i32,
    scale: f64,
}

impl Viewport {
    fn fit(w: usize, h: usize) -> Self {
        let scale = (w as f64 / WIN_W as f64).min(h as f64 / WIN_H as f64);
        let vw = (WIN_W as f64 * scale).round() as i32;
        let vh = (WIN_H as f64 * scale).round() as i32;
        Self {
            ox: (w as i32 - vw) / 2,
            oy: (h as i32 - vh) / 2,
            scale,
        }
    }

    fn bounds(&self) -> Rect {
        self.map(Rect::new(0, 0, WIN_W, WIN_H))
            .unwrap_or(Rect::new(self.ox, self.oy, 0, 0))
    }

    /// World rect to buffer pixels. Anything visible keeps at least one pixel
    /// in each direction.
    fn map(&self, rect: Rect) -> Option<Rect> {
        let r = rect.clip(&Rect::new(0, 0, WIN_W, WIN_H))?;
        let x0 = (r.x as f64 * self.scale).round() as i32;
        let y0 = (r.y as f64 * self.scale).round() as i32;
        let x1 = ((r.right() as f64 * self.scale).round() as i32).max(x0 + 1);
        let y1 = ((r.bottom() as f64 * self.scale).round() as i32).max(y0 + 1);
        Some(Rect::new(self.ox + x0, self.oy + y0, x1 - x0, y1 - y0))
    }

    /// Size of one glyph pixel for the HUD.
    fn cell(&self) -> i32 {
        ((self.scale * 6.0).round() as i32).max(1)
    }
}

// ── 3x5 bitmap digits ──────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, cell: i32, d: u8, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for (i, on) in glyph.iter().enumerate() {
        if *on == 1 {
            let px = x + (i % 3) as i32 * cell;
            let py = y + (i / 3) as i32 * cell;
            buf.fill(Rect::new(px + 1, py + 1, cell, cell), SHADOW);
            buf.fill(Rect::new(px, py, cell, cell), fg);
        }
    }
}

fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, cell: i32, n: u32, fg: Rgb) {
    let s = n.to_string();
    let advance = 4 * cell; // 3 cells per digit + 1 cell spacing
    let total_w = s.len() as i32 * advance - cell;
    let start_x = cx - total_w / 2;
    for (i, ch) in s.bytes().enumerate() {
        draw_digit(buf, start_x + i as i32 * advance, y, cell, ch - b'0', fg);
    }
}

// ── Surface ─────────────────────────────────────────────────────────────────

pub struct TerminalSurface<W: Write> {
    out: W,
    buf: PixelBuf,
    view: Viewport,
}

impl<W: Write> TerminalSurface<W> {
    /// `cols` x `rows` character cells.
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        let (w, h) = (cols as usize, rows as usize * 2);
        Self {
            out,
            buf: PixelBuf::new(w, h),
            view: Viewport::fit(w, h),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) {
        let all = Rect::new(0, 0, self.buf.w as i32, self.buf.h as i32);
        self.buf.fill(all, LETTERBOX);
        self.buf.fill(self.view.bounds(), BACKGROUND);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if let Some(r) = self.view.map(rect) {
            self.buf.fill(r, color);
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.buf.render(&mut self.out)
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let (w, h) = (cols as usize, rows as usize * 2);
        log::debug!("terminal resized to {cols}x{rows}");
        self.buf.resize(w, h);
        self.view = Viewport::fit(w, h);
    }

    fn draw_hud(&mut self, hud: Hud) {
        let bounds = self.view.bounds();
        let cell = self.view.cell();
        let cx = bounds.x + bounds.w / 2;
        match hud {
            Hud::Score(score) => {
                let y = bounds.y + 2 * cell;
                draw_number(&mut self.buf, cx, y, cell, score, SCORE_COLOR);
            }
            Hud::Menu => {
                // Title bar of blocks with a bird sitting on the left.
                let y = bounds.y + bounds.h / 4;
                let block = 4 * cell;
                let total_w = 6 * block;
                let sx = cx - total_w / 2;
                for i in 0..6 {
                    let bx = sx + i * block;
                    self.buf.fill(Rect::new(bx, y, block - cell, 6 * cell), BIRD_COLOR);
                    self.buf.fill(Rect::new(bx, y, block - cell, cell), SCORE_COLOR);
                }
                let bird = Rect::centered(BIRD_START_X, BIRD_START_Y, BIRD_SIDE);
                if let Some(r) = self.view.map(bird) {
                    self.buf.fill(r, BIRD_COLOR);
                }
            }
        }
    }
}

// ── Terminal session ────────────────────────────────────────────────────────

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct Terminal {
    active: bool,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Dropping on a failed setup undoes whatever did get applied.
        let term = Self { active: true };
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            terminal::SetTitle(WINDOW_TITLE),
            cursor::Hide,
            terminal::DisableLineWrap,
            EnableMouseCapture,
        )?;
        Ok(term)
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let result = execute!(
            io::stdout(),
            DisableMouseCapture,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        )
        .and_then(|()| terminal::disable_raw_mode());
        if let Err(e) = result {
            log::error!("failed to restore terminal: {e}");
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.restore();
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

/// Reads crossterm events. Resizes are kept aside for the renderer.
#[derive(Debug, Default)]
pub struct TerminalInput {
    resized: Option<(u16, u16)>,
}

impl TerminalInput {
    fn handle(&mut self, event: Event, batch: &mut Vec<Input>) {
        if let Event::Resize(cols, rows) = event {
            self.resized = Some((cols, rows));
        } else if let Some(input) = input::from_terminal_event(&event) {
            batch.push(input);
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Input>> {
        let mut batch = Vec::new();
        if event::poll(timeout)? {
            self.handle(event::read()?, &mut batch);
            while event::poll(Duration::ZERO)? {
                self.handle(event::read()?, &mut batch);
            }
        }
        Ok(batch)
    }

    fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PIPE_COLOR;

    #[test]
    fn test_viewport_letterboxes_wide_terminal() {
        // 200 cols x 60 rows -> 200 x 120 pixels, height bound.
        let view = Viewport::fit(200, 120);
        assert_eq!(view.scale, 0.2);
        assert_eq!(view.bounds(), Rect::new(55, 0, 90, 120));
    }

    #[test]
    fn test_map_keeps_small_rects_visible() {
        let view = Viewport::fit(45, 60);
        let r = view.map(Rect::new(100, 88, 2, 2)).unwrap();
        assert_eq!((r.w, r.h), (1, 1));
    }

    #[test]
    fn test_map_drops_offscreen_rects() {
        let view = Viewport::fit(45, 60);
        assert_eq!(view.map(Rect::new(-80, 0, 50, 200)), None);
        assert_eq!(view.map(Rect::new(450, 0, 50, 200)), None);
    }

    #[test]
    fn test_fill_rect_lands_in_buffer() {
        let mut surface = TerminalSurface::new(Vec::new(), 45, 30);
        surface.clear();
        surface.fill_rect(Rect::new(0, 0, 50, 200), PIPE_COLOR);

        assert_eq!(surface.buf.get(0, 0), PIPE_COLOR);
        assert_eq!(surface.buf.get(4, 19), PIPE_COLOR);
        assert_eq!(surface.buf.get(5, 0), BACKGROUND);
        assert_eq!(surface.buf.get(0, 20), BACKGROUND);
    }

    #[test]
    fn test_present_writes_one_line_per_two_pixel_rows() {
        let mut surface = TerminalSurface::new(Vec::new(), 45, 30);
        surface.clear();
        surface.fill_rect(Rect::new(100, 300, 25, 25), BIRD_COLOR);
        surface.present().unwrap();

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out.matches("\r\n").count(), 29);
        assert!(out.contains('\u{2580}') || out.contains(' '));
    }

    #[test]
    fn test_score_hud_draws_digits() {
        let mut surface = TerminalSurface::new(Vec::new(), 45, 30);
        surface.clear();
        surface.draw_hud(Hud::Score(7));
        let lit = surface.buf.px.iter().filter(|c| **c == SCORE_COLOR).count();
        // "7" has seven lit cells.
        assert_eq!(lit, 7);
    }
}
