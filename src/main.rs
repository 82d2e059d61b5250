mod cli_messages;
mod config;
mod consts;
mod headless;
mod logging;
mod menu;
mod router;
mod stats;
mod theme;
mod ui;

use crate::cli_messages::{print_info, print_success, print_warn};
use crate::config::{Config, get_config_path};
use crate::stats::{DashboardSource, MockPayloadSource};
use crate::theme::ThemeMarker;
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use std::{error::Error, io, panic};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Config file to use instead of ~/.solicite-admin/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the admin dashboard
    Start {
        /// Path to open first, e.g. /complaints
        #[arg(long, value_name = "PATH")]
        route: Option<String>,

        /// Start in dark mode
        #[arg(long)]
        dark: bool,

        /// Start with the sidebar collapsed
        #[arg(long)]
        collapsed: bool,

        /// Skip the splash screen
        #[arg(long)]
        no_splash: bool,

        /// Simulated latency of the statistics source, in milliseconds
        #[arg(long, value_name = "MS")]
        fetch_delay_ms: Option<u64>,
    },
    /// Print the dashboard statistics without starting the UI
    Snapshot {
        /// Print the raw payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the navigation routes
    Routes,
    /// Show which view a path resolves to
    Resolve {
        /// Path to resolve, e.g. /providers
        path: String,
    },
    /// Show the effective configuration
    Config {
        /// Overwrite the config file with the defaults
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path(args.config.as_deref())?;

    match args.command {
        Command::Start {
            route,
            dark,
            collapsed,
            no_splash,
            fetch_delay_ms,
        } => {
            let config = Config::load_or_default(&config_path)?;
            logging::init(&config.log_file_path()?)?;
            info!("Using config file {}", config_path.display());

            let ui_config = UIConfig {
                start_path: route.unwrap_or_else(|| config.start_path.clone()),
                sidebar_open: config.sidebar_open && !collapsed,
                dark_mode: config.dark_mode || dark,
                with_background_color: config.with_background_color,
                show_splash: !no_splash,
            };
            let delay = Duration::from_millis(fetch_delay_ms.unwrap_or(config.fetch_delay_ms));
            start(ui_config, Arc::new(MockPayloadSource::new(delay))).await
        }
        Command::Snapshot { json } => {
            let stats = headless::load_stats(&MockPayloadSource::immediate()).await?;
            if json {
                println!("{}", headless::snapshot_json(&stats)?);
            } else {
                print!("{}", headless::snapshot_text(&stats)?);
            }
            Ok(())
        }
        Command::Routes => {
            print!("{}", headless::routes_table()?);
            Ok(())
        }
        Command::Resolve { path } => {
            let (resolution, description) = headless::resolve(&path);
            if resolution.redirected {
                print_warn("Unknown path", "falling back to the dashboard");
            }
            println!("{}", description);
            Ok(())
        }
        Command::Config { reset } => {
            if reset {
                Config::default().save(&config_path)?;
                print_success("Configuration reset", &config_path.display().to_string());
            }
            let config = Config::load_or_default(&config_path)?;
            print_info("Config file", &config_path.display().to_string());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Runs the dashboard UI on the alternate screen and restores the terminal afterwards.
async fn start(
    ui_config: UIConfig,
    source: Arc<dyn DashboardSource>,
) -> Result<(), Box<dyn Error>> {
    install_panic_hook();

    // Terminal setup; the guard restores it on every exit path from here on
    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(ui_config, source, ThemeMarker::document_root());
    let result = ui::run(&mut terminal, app).await;

    drop(terminal);
    drop(guard);

    info!("Admin dashboard closed");
    result?;
    Ok(())
}

/// Restores the terminal when dropped, including on early returns.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// Chains a hook that restores the terminal before the panic message is printed.
fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal(&mut io::stdout());
            previous(info);
        }));
    });
}

/// Leaves the alternate screen and raw mode, ignoring failures.
fn restore_terminal<W: Write>(out: &mut W) {
    let _ = execute!(out, DisableMouseCapture);
    let _ = execute!(out, cursor::Show);
    let _ = execute!(out, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_terminal_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "alternate screen not left");
        assert!(written.contains("\x1b[?25h"), "cursor not shown");
        assert!(written.contains("\x1b[?1000l"), "mouse capture not disabled");
    }

    #[test]
    fn restore_terminal_is_safe_outside_raw_mode() {
        let mut out = Vec::new();
        restore_terminal(&mut out);
        restore_terminal(&mut out);
        assert!(!out.is_empty());
    }

    #[test]
    fn panic_hook_installs_once_and_keeps_unwinding() {
        install_panic_hook();
        install_panic_hook();

        let result = panic::catch_unwind(|| {
            let widths: Vec<u16> = Vec::new();
            widths[0]
        });
        assert!(result.is_err());
    }
}
