//! Renders generations through a plain closure instead of a terminal
//! heatmap, printing each board as text.

use std::io;
use std::time::Duration;

use lifeboard::grid::Grid;
use lifeboard::pattern;
use lifeboard::runner::Runner;

fn main() -> anyhow::Result<()> {
    let board = pattern::parse_plaintext(pattern::GLIDER.as_bytes())?.centered(8, 8);

    let runner = Runner {
        steps: 4,
        delay: Duration::ZERO,
        ..Runner::default()
    };

    let mut renderer = |grid: &Grid, step: usize| -> io::Result<()> {
        println!("step {step}:");
        println!("{grid}");
        println!();

        Ok(())
    };

    runner.run(board, &mut renderer)?;

    Ok(())
}
