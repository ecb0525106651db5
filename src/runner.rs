use std::io;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::engine;
use crate::grid::Grid;
use crate::rule_set::RuleSet;

/// Where finished generations go.
///
/// The runner hands every stepped board to its renderer together with the
/// 1-indexed step number. Clearing or refreshing the previous frame is the
/// renderer's business, not the runner's.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, step: usize) -> io::Result<()>;
}

impl<F> Renderer for F
where
    F: FnMut(&Grid, usize) -> io::Result<()>,
{
    fn render(&mut self, grid: &Grid, step: usize) -> io::Result<()> {
        self(grid, step)
    }
}

/// Drives a board through a fixed number of generations.
pub struct Runner {
    /// Number of generations to advance and render
    pub steps: usize,

    /// Pause between frames. The last frame is not followed by a pause.
    pub delay: Duration,

    /// Life rules applied at every step
    pub set: RuleSet,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            steps: 10,
            delay: Duration::from_millis(500),
            set: RuleSet::default(),
        }
    }
}

impl Runner {
    pub fn new(steps: usize, delay: Duration) -> Self {
        Self {
            steps,
            delay,
            ..Self::default()
        }
    }

    /// Step and render the board `self.steps` times.
    ///
    /// Renderer failures abort the run and bubble up as-is. Returns the last
    /// generation, or the initial board untouched when `steps` is zero.
    pub fn run<R: Renderer>(&self, mut grid: Grid, renderer: &mut R) -> io::Result<Grid> {
        for step in 1..=self.steps {
            grid = engine::step_with(&grid, self.set);

            renderer.render(&grid, step)?;
            debug!(step, population = grid.population(), "rendered generation");

            if step < self.steps && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        Ok(grid)
    }
}
