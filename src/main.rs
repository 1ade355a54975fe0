use std::io;

use anyhow::Result;
use tracing::info;

use rookery_cli::TurnController;
use rookery_core::Board;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("rookery starting");

    // An optional placement string replaces the standard start position.
    let start = match std::env::args().nth(1) {
        Some(placement) => placement.parse::<Board>()?,
        None => Board::starting_position(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    TurnController::with_start(stdin.lock(), stdout.lock(), start).run()?;

    info!("rookery shutting down");
    Ok(())
}
