use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use planner::cli::{handle_config_command, handle_summary_command, MenuController};
use planner::config::{PlannerPaths, Settings};
use planner::session::Session;

#[derive(Parser)]
#[command(
    name = "planner",
    author = "Aliyah Growe",
    version,
    about = "Track and manage the budget for an interior design or renovation project",
    long_about = "Budget Planner keeps an itemized list of expenses against a single \
                  budget figure, shows whether you are over or under budget, and \
                  saves everything to a plain text file."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    Menu {
        /// Load this saved file before showing the menu
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the summary of a saved file
    Summary {
        /// Path to a saved expense file
        file: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)
        .with_context(|| format!("loading {}", paths.settings_file().display()))?;

    match cli.command {
        None => run_menu(paths, settings, None)?,
        Some(Commands::Menu { file }) => run_menu(paths, settings, file)?,
        Some(Commands::Summary { file, json }) => {
            let mut session = Session::new(paths, settings);
            handle_summary_command(&mut session, &file, json, &mut io::stdout().lock())
                .with_context(|| format!("summarizing {}", file.display()))?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn run_menu(paths: PlannerPaths, settings: Settings, file: Option<PathBuf>) -> Result<()> {
    let mut session = Session::new(paths, settings);

    if let Some(path) = file {
        // A bad preload is not fatal; start with an empty session instead.
        if let Err(e) = session.load(&path) {
            println!("Could not load {}: {}", path.display(), e);
        }
    }

    let stdin = io::stdin();
    let mut menu = MenuController::new(session, stdin.lock(), io::stdout().lock());
    menu.run()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
