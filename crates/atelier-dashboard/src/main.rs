//! Atelier owner dashboard.
//!
//! Terminal dashboard for monitoring workers and manually assigning
//! unassigned tasks, plus one-shot commands for scripting.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use atelier_admin_client::{HttpClient, OwnerApi};
use atelier_core::MANUAL_ASSIGNMENT_REASON;

mod app;
mod backend;
mod commands;
mod config;
mod error;
mod event;
mod state;
#[cfg(test)]
mod testing;
mod ui;

use app::App;
use config::{DashboardConfig, RefreshPolicy, StaleDataPolicy};
use event::{BackendCommand, UiEvent};

const DEFAULT_LOG_FILTER: &str = "atelier_dashboard=debug,atelier_admin_client=debug";

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Atelier owner dashboard")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ApiArgs {
    /// Owner API base URL
    #[arg(short, long, global = true, default_value = "http://localhost:3000/api")]
    api_url: String,

    /// Bearer token for the owner API
    #[arg(long, global = true)]
    token: Option<String>,

    /// Request timeout in seconds (unbounded when omitted)
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive worker dashboard (default)
    #[command(alias = "ui")]
    Dashboard {
        /// What to show after a failed refresh
        #[arg(long, value_enum, default_value_t = StaleDataPolicy::KeepLastGood)]
        stale_data: StaleDataPolicy,

        /// Ignore fetch results older than the newest refresh
        #[arg(long)]
        discard_stale: bool,

        /// Log file (the terminal is taken over by the UI)
        #[arg(long, default_value = "/tmp/atelier-dashboard.log")]
        log_file: PathBuf,
    },

    /// Print workers as JSON
    #[command(name = "list-workers")]
    ListWorkers,

    /// Print unassigned tasks as JSON
    #[command(name = "list-unassigned")]
    ListUnassigned,

    /// Assign a task to a worker
    Assign {
        /// Task ID
        #[arg(short, long)]
        task: String,

        /// Worker ID
        #[arg(short, long)]
        worker: String,

        /// Reason recorded with the assignment
        #[arg(short, long, default_value = MANUAL_ASSIGNMENT_REASON)]
        reason: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = DashboardConfig {
        api_url: cli.api.api_url,
        token: cli.api.token,
        request_timeout: cli.api.request_timeout.map(Duration::from_secs),
        ..DashboardConfig::default()
    };

    let command = cli.command.unwrap_or(Commands::Dashboard {
        stale_data: StaleDataPolicy::default(),
        discard_stale: false,
        log_file: config.log_file.clone(),
    });

    match command {
        Commands::Dashboard {
            stale_data,
            discard_stale,
            log_file,
        } => {
            config.refresh = RefreshPolicy {
                stale_data,
                discard_stale,
            };
            config.log_file = log_file;
            init_file_logging(&config);
            run_dashboard(config)
        }
        Commands::ListWorkers => {
            init_stderr_logging();
            let client = HttpClient::with_options(&config.api_url, config.client_options())?;
            let output = block_on(commands::list_workers(&client))??;
            println!("{}", output);
            Ok(())
        }
        Commands::ListUnassigned => {
            init_stderr_logging();
            let client = HttpClient::with_options(&config.api_url, config.client_options())?;
            let output = block_on(commands::list_unassigned(&client))??;
            println!("{}", output);
            Ok(())
        }
        Commands::Assign {
            task,
            worker,
            reason,
        } => {
            init_stderr_logging();
            let client = HttpClient::with_options(&config.api_url, config.client_options())?;
            let output = block_on(commands::assign(&client, task, worker, reason))??;
            println!("{}", output);
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Where dashboard logs go.
enum LogSink {
    File(std::fs::File),
    /// The log file could not be created.
    Stderr(std::io::Error),
}

fn log_sink(path: &Path) -> LogSink {
    match std::fs::File::create(path) {
        Ok(file) => LogSink::File(file),
        Err(e) => LogSink::Stderr(e),
    }
}

/// Send tracing output to a file so it does not draw over the UI.
///
/// Falls back to stderr when the file cannot be created; those lines land
/// on the normal screen once the terminal is restored.
fn init_file_logging(config: &DashboardConfig) {
    match log_sink(&config.log_file) {
        LogSink::File(file) => tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(env_filter())
            .with_ansi(false)
            .init(),
        LogSink::Stderr(e) => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter())
                .init();
            warn!(
                path = %config.log_file.display(),
                error = %e,
                "Cannot create log file, logging to stderr"
            );
        }
    }
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, std::io::Error> {
    let rt = tokio::runtime::Runtime::new()?;
    Ok(rt.block_on(future))
}

fn run_dashboard(config: DashboardConfig) -> Result<(), Box<dyn Error>> {
    info!(api_url = %config.api_url, policy = ?config.refresh, "Starting dashboard");

    let client: Arc<dyn OwnerApi> =
        Arc::new(HttpClient::with_options(&config.api_url, config.client_options())?);

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // Spawn background thread with its own tokio runtime
    let bg_handle = std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(backend::run_backend(client, ui_tx, cmd_rx));
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let mut terminal = ratatui::init();

    let mut app = App::new(config.refresh, ui_rx, cmd_tx);
    let result = app.run(&mut terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    let _ = bg_handle.join();

    info!("Dashboard shutdown complete");

    result?;
    Ok(())
}
