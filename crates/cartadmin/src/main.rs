//! cartadmin - OpenCart administration sidebar, in the terminal and the browser

mod cli;

use anyhow::{Context, Result};
use cartadmin_core::{load_menu, AdminConfig, ErrorSeverity, MenuReport, NavModel};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cartadmin",
    version,
    about = "OpenCart administration sidebar for the terminal and the browser",
    long_about = "Hierarchical admin navigation with per-entry expansion, active-route\n\
                  highlighting and a responsive sidebar that turns into a dismissible\n\
                  overlay below a width breakpoint.\n\
                  \n\
                  Examples:\n\
                    cartadmin                               # Run TUI (default)\n\
                    cartadmin web --port 8080               # Serve the menu API\n\
                    cartadmin menu --route /catalog/products\n\
                    cartadmin menu --expand 7 --expand 7.2  # Expand by path\n\
                    cartadmin check --menu ./menu.yaml      # Validate a menu file\n\
                    cartadmin resolve /localisation/tax-rates\n\
                  \n\
                  Environment Variables:\n\
                    CARTADMIN_MENU                          # Menu file (JSON or YAML)\n\
                    CARTADMIN_CONFIG                        # Config file\n\
                    CARTADMIN_NO_COLOR                      # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                                # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Menu file to use instead of the built-in OpenCart menu
    #[arg(long, global = true, env = "CARTADMIN_MENU")]
    menu: Option<PathBuf>,

    /// Config file (default: <config_dir>/cartadmin/config.json)
    #[arg(long, global = true, env = "CARTADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "CARTADMIN_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui {
        /// Route shown on startup (default: from config)
        #[arg(long)]
        route: Option<String>,
    },
    /// Run web interface
    Web {
        /// Port for web server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
    /// Print the sidebar as it would render
    Menu {
        /// Expand the branch at this path (e.g. 7.2); repeatable
        #[arg(long, short = 'e')]
        expand: Vec<String>,
        /// Current route, highlighted and revealed
        #[arg(long, short = 'r', default_value = "/")]
        route: String,
        /// Expand every branch
        #[arg(long)]
        all: bool,
        /// Output the menu document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the menu and exit (non-zero on fatal issues)
    Check,
    /// Show which entry a route activates
    Resolve {
        route: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Tui { route: None });

    // The TUI owns the terminal, so its logs go to a file
    let log_to_file = matches!(mode, Mode::Tui { .. });
    init_logging(log_to_file, cli.no_color)?;

    let config_path = cli.config.or_else(AdminConfig::default_path);
    let config = config_path
        .as_deref()
        .map(AdminConfig::load)
        .unwrap_or_default();

    // --menu wins over the config file
    let menu_path = cli.menu.or_else(|| config.menu.clone());
    let no_color = cli.no_color;

    match mode {
        Mode::Tui { route } => {
            let (model, report) = load_checked_menu(menu_path.as_deref());
            let options = cartadmin_tui::TuiOptions {
                breakpoint: config.tui_breakpoint_cols,
                start_route: route.unwrap_or(config.start_route),
                color: !no_color,
                menu_warnings: report.warning_count(),
            };
            tokio::task::spawn_blocking(move || cartadmin_tui::run(Arc::new(model), options))
                .await
                .context("TUI task panicked")??;
        }
        Mode::Web { port } => {
            let (model, report) = load_checked_menu(menu_path.as_deref());
            let state = cartadmin_web::AppState::new(
                Arc::new(model),
                config.web_breakpoint_px,
                report.warning_count(),
            );
            cartadmin_web::run(state, port).await?;
        }
        Mode::Menu {
            expand,
            route,
            all,
            json,
        } => {
            let (model, _) = load_checked_menu(menu_path.as_deref());
            let expansion = cli::expansion_for(&model, &expand, &route, all)?;
            println!(
                "{}",
                cli::format_menu_tree(&model, &expansion, &route, json, no_color)
            );
        }
        Mode::Check => {
            let (_, report) = load_menu(menu_path.as_deref());
            println!("{}", cli::format_report(&report, no_color));
            if report.has_fatal_errors() {
                std::process::exit(1);
            }
        }
        Mode::Resolve { route, json } => {
            let (model, _) = load_checked_menu(menu_path.as_deref());
            println!("{}", cli::format_resolve(&model, &route, json));
        }
    }

    Ok(())
}

/// Load the menu, reporting fatal problems before falling back to the built-in one
fn load_checked_menu(path: Option<&Path>) -> (NavModel, MenuReport) {
    let (model, report) = load_menu(path);

    if report.has_fatal_errors() {
        eprintln!("Menu could not be loaded, using the built-in OpenCart menu:");
        let fatal = report
            .issues
            .iter()
            .filter(|issue| issue.severity == ErrorSeverity::Fatal);
        for issue in fatal {
            eprintln!("  - {}: {}", issue.source, issue.message);
            if let Some(suggestion) = &issue.suggestion {
                eprintln!("    {}", suggestion);
            }
        }
    }

    let warnings = report.warning_count();
    if warnings > 0 {
        warn!(warnings, "Menu loaded with warnings (run `cartadmin check` for details)");
    }
    info!(nodes = report.nodes_scanned, "Menu ready");

    (model, report)
}

/// Install the tracing subscriber (`RUST_LOG`, default `warn`)
fn init_logging(to_file: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        let Some(dir) = dirs::cache_dir().map(|dir| dir.join("cartadmin")) else {
            // No cache dir: TUI runs without logs
            return Ok(());
        };
        std::fs::create_dir_all(&dir).context("Failed to create log directory")?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("cartadmin.log"))
            .context("Failed to open log file")?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(!no_color)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
