use std::io::{self, Write};

use crate::game::TickEvent;

/// Line-oriented record of deaths and scores: `You died` on the tick the bird
/// dies and the new score, in decimal, on every point.
#[derive(Debug, Default)]
pub struct Diagnostics<W> {
    out: W,
}

impl<W: Write> Diagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn record(&mut self, events: &[TickEvent]) -> io::Result<()> {
        for event in events {
            match event {
                TickEvent::Died => writeln!(self.out, "You died")?,
                TickEvent::Scored(score) => writeln!(self.out, "{score}")?,
                TickEvent::PipeSpawned { .. } | TickEvent::Evicted(_) => {}
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_writes_deaths_and_scores_only() {
        let mut diag = Diagnostics::new(Vec::new());
        diag.record(&[
            TickEvent::PipeSpawned { x: 444, gap_top: 100 },
            TickEvent::Scored(1),
            TickEvent::Died,
            TickEvent::Evicted(1),
        ])
        .unwrap();
        diag.record(&[TickEvent::Scored(12)]).unwrap();

        let text = String::from_utf8(diag.into_inner()).unwrap();
        assert_eq!(text, "1\nYou died\n12\n");
    }
}
