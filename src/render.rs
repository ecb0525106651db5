use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;

use crate::grid::Grid;
use crate::runner::Renderer;

/// Fill color of a live cell, the bright end of the plasma colormap.
pub const ALIVE_COLOR: Color = Color::Rgb {
    r: 240,
    g: 249,
    b: 33,
};

/// Fill color of a dead cell, the dark end of the plasma colormap.
pub const DEAD_COLOR: Color = Color::Rgb { r: 13, g: 8, b: 135 };

/// Draws the board as a block heatmap on a terminal.
///
/// Every frame clears the previous one, redraws from the top-left corner, and
/// leads with a title line naming the step. Commands are queued and flushed
/// once per frame.
pub struct Heatmap<W: Write> {
    out: W,
}

impl Heatmap<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Heatmap<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for Heatmap<W> {
    fn render(&mut self, grid: &Grid, step: usize) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            style::Print(format!("Board State at Step {step}")),
            cursor::MoveToNextLine(1),
        )?;

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let color = if grid.is_alive(row, col) {
                    ALIVE_COLOR
                } else {
                    DEAD_COLOR
                };

                // Two columns per cell, a terminal cell is roughly twice as
                // tall as it is wide
                queue!(
                    self.out,
                    style::SetBackgroundColor(color),
                    style::Print("  ")
                )?;
            }

            queue!(self.out, style::ResetColor, cursor::MoveToNextLine(1))?;
        }

        self.out.flush()
    }
}
