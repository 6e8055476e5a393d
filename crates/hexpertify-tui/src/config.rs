//! Front-end configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON fixture seeding the in-memory data service.
    pub fixture: Option<PathBuf>,

    /// File receiving tracing output.
    pub log_file: PathBuf,

    /// Tracing filter directives.
    pub log_filter: String,

    /// Redraw/poll interval.
    pub tick: Duration,

    /// Whether to capture mouse events (row hover).
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture: None,
            log_file: PathBuf::from("/tmp/hexpertify-tui.log"),
            log_filter: "hexpertify_tui=debug,hexpertify_core=debug".to_string(),
            tick: Duration::from_millis(100),
            mouse: true,
        }
    }
}
