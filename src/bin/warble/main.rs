//! warble - live vibrato and peak-meter terminal demo
//!
//! Run with: cargo run --features tui
//!
//! Meters the default capture device through the vibrato chain; without a
//! capture device it meters an internally generated tone instead. Set
//! RUST_LOG and redirect stderr to see the library's tracing output.

mod app;
mod ui;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app = App::start()?;

    let mut terminal = ratatui::init();
    let res = app.run(&mut terminal);
    ratatui::restore();
    res
}
