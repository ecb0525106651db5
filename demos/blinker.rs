use std::time::Duration;

use lifeboard::pattern;
use lifeboard::render::Heatmap;
use lifeboard::runner::Runner;

fn main() -> anyhow::Result<()> {
    let board = pattern::parse_plaintext(pattern::BLINKER.as_bytes())?;

    let runner = Runner {
        steps: 6,
        delay: Duration::from_millis(200),
        ..Runner::default()
    };

    runner.run(board, &mut Heatmap::stdout())?;

    Ok(())
}
