use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkers_cli::{Session, SessionConfig, SessionOutcome, TerminalRenderer};

/// Two-player checkers in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keep previous boards on screen instead of clearing before each redraw.
    #[arg(long)]
    no_clear: bool,

    /// List the legal moves after a rejected move.
    #[arg(long)]
    hints: bool,
}

/// Filter built from `RUST_LOG` directives. Logging is off when they are
/// missing or invalid, so nothing is printed over the board by default.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("off"))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let config = SessionConfig {
        clear_screen: !args.no_clear,
        show_hints: args.hints,
    };
    info!(?config, "checkers starting");

    let renderer = TerminalRenderer::new(io::stdout().lock(), config.clear_screen);
    let mut session = Session::new(io::stdin().lock(), renderer, config);
    match session.run()? {
        SessionOutcome::Finished { winner } => info!(%winner, "game finished"),
        SessionOutcome::Quit => info!("game abandoned"),
        SessionOutcome::InputClosed => info!("input closed"),
    }
    Ok(())
}
