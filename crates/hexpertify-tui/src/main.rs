//! Hexpertify Terminal UI.
//!
//! Navigation, the signed-in user's profile form and the services table.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use tokio::sync::mpsc;
use tracing::{error, info};

use hexpertify_core::{Fixture, MemoryProfileApi, ProfileApi};

mod app;
mod backend;
mod config;
mod event;
mod state;
mod ui;

use app::App;
use config::Config;
use event::{BackendCommand, UiEvent};

#[derive(Parser)]
#[command(name = "hexpertify-tui")]
#[command(about = "Hexpertify Terminal UI")]
#[command(version)]
struct Cli {
    /// JSON fixture with `profile` and `services` (built-in sample data if omitted)
    #[arg(short, long)]
    fixture: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "/tmp/hexpertify-tui.log")]
    log_file: PathBuf,

    /// Tracing filter directives
    #[arg(long, default_value = "hexpertify_tui=debug,hexpertify_core=debug")]
    log_filter: String,

    /// Redraw interval in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Do not capture the mouse (disables row hover)
    #[arg(long)]
    no_mouse: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            fixture: cli.fixture,
            log_file: cli.log_file,
            log_filter: cli.log_filter,
            tick: Duration::from_millis(cli.tick_ms.max(1)),
            mouse: !cli.no_mouse,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from(Cli::parse());

    // Write logs to a file to avoid terminal interference
    if let Ok(file) = std::fs::File::create(&config.log_file) {
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(config.log_filter.as_str())
            .with_ansi(false)
            .init();
    }

    run_tui(config)
}

fn run_tui(config: Config) -> Result<(), Box<dyn Error>> {
    let fixture = match &config.fixture {
        Some(path) => Fixture::load(path)?,
        None => Fixture::demo(),
    };
    info!(fixture = ?config.fixture, "Starting TUI");

    let api: Arc<dyn ProfileApi> = Arc::new(MemoryProfileApi::new(fixture));

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // Spawn background thread with its own tokio runtime
    let bg_handle = std::thread::spawn(move || {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(backend::run_backend(api, ui_tx, cmd_rx)),
            Err(e) => error!(error = %e, "Failed to create tokio runtime"),
        }
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();
    if config.mouse {
        crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    // Run UI loop on main thread
    let mut app = App::new(ui_rx, cmd_tx, config.tick);
    let result = app.run(terminal);

    if config.mouse {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();

    // Wait for background thread to finish
    let _ = bg_handle.join();

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}
