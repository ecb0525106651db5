use tracing_subscriber::EnvFilter;

use lifeboard::pattern;
use lifeboard::render::Heatmap;
use lifeboard::runner::Runner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let glider = pattern::parse_plaintext(pattern::GLIDER.as_bytes())?;
    let board = glider.centered(20, 20);

    let runner = Runner::default();
    runner.run(board, &mut Heatmap::stdout())?;

    Ok(())
}
