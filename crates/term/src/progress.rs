//! ProgressLine: a single self-overwriting status line on stderr.
//!
//! Commands are queued into a byte buffer and flushed in one write, so a
//! redraw never interleaves with other output.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::engine::ExploreStats;

/// Minimum time between redraws
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

pub struct ProgressLine {
    out: io::Stderr,
    buf: Vec<u8>,
    enabled: bool,
    started: Instant,
    last_draw: Option<Instant>,
}

impl ProgressLine {
    pub fn new(enabled: bool) -> Self {
        Self {
            out: io::stderr(),
            buf: Vec::with_capacity(256),
            enabled,
            started: Instant::now(),
            last_draw: None,
        }
    }

    /// Redraw if enabled and the last redraw is older than [`REDRAW_INTERVAL`]
    pub fn update(&mut self, stats: &ExploreStats) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let now = Instant::now();
        if let Some(last) = self.last_draw {
            if now.duration_since(last) < REDRAW_INTERVAL {
                return Ok(());
            }
        }
        self.last_draw = Some(now);
        self.draw(stats, false)
    }

    /// Final redraw followed by a newline
    pub fn finish(&mut self, stats: &ExploreStats) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.draw(stats, true)
    }

    fn draw(&mut self, stats: &ExploreStats, last: bool) -> Result<()> {
        self.buf.clear();
        encode_line_into(stats, self.started.elapsed(), &mut self.buf)?;
        if last {
            self.buf.queue(Print("\n"))?;
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Text of the status line
pub fn format_line(stats: &ExploreStats, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 {
        stats.emitted as f64 / secs
    } else {
        0.0
    };
    format!(
        "{}/{} states | {} pending | {:.0} states/s",
        stats.emitted, stats.discovered, stats.pending, rate
    )
}

/// Queue "go to column 0, clear line, print status" into `buf`
pub fn encode_line_into(stats: &ExploreStats, elapsed: Duration, buf: &mut Vec<u8>) -> Result<()> {
    buf.queue(cursor::MoveToColumn(0))?;
    buf.queue(terminal::Clear(ClearType::CurrentLine))?;
    buf.queue(Print(format_line(stats, elapsed)))?;
    Ok(())
}
