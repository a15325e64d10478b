use std::path::{Path, PathBuf};

use clap::Parser;
use kbc_quiz::{format_rupees, GameConfig, Outcome, Show};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the question order, lifelines and confetti
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds to type each character of the host's messages
    #[arg(long, default_value_t = 6)]
    typing_speed: u64,

    /// Ring the terminal bell for sound cues
    #[arg(long)]
    bell: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            typing_speed: std::time::Duration::from_millis(self.typing_speed),
            bell: self.bell,
            ..GameConfig::default()
        }
    }
}

/// File logging only; stdout belongs to the TUI.
fn init_logging(path: &Path) -> Option<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file = path.file_name()?;
    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Some(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    let _log_guard = args.log_file.as_deref().and_then(init_logging);

    let result = match Show::new(args.config()) {
        Ok(show) => show.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(ending)) => match ending.outcome {
            Outcome::Completed => println!("YOU WON {}", format_rupees(ending.winnings)),
            _ => println!("Your total winning amount: {}", format_rupees(ending.winnings)),
        },
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error running game: {}", e);
            std::process::exit(1);
        }
    }
}
