use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use modnuke::commands::clean::CleanOptions;
use modnuke::commands::config_cmd::ConfigOptions;
use modnuke::commands::scan::ScanOptions;
use modnuke::commands::{execute_clean, execute_config, execute_scan};
use modnuke::error::AppError;
use modnuke::model::SortField;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => {
            let options = ScanOptions {
                root: args.path,
                sort: args.sort,
                ascending: args.ascending,
                verbose: args.verbose,
            };
            execute_scan(options)?;
        }
        Commands::Clean(args) => {
            let options = CleanOptions {
                root: args.path,
                all: args.all,
                assume_yes: args.yes,
                verbose: args.verbose,
            };
            execute_clean(options)?;
        }
        Commands::Config(args) => {
            let options =
                ConfigOptions { show_path: args.path, edit: args.edit, set_root: args.set_root };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "modnuke", version, about = "Find and delete node_modules directories to reclaim disk space.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find node_modules directories and report their sizes.
    Scan(ScanArgs),
    /// Find node_modules directories, pick some, and delete them.
    Clean(CleanArgs),
    /// Manage modnuke configuration (default root, etc.).
    Config(ConfigArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Sort results by this field (path or size).
    #[arg(short = 's', long = "sort", value_name = "FIELD", default_value = "size")]
    sort: SortField,

    /// Sort ascending instead of descending.
    #[arg(long = "asc", action = ArgAction::SetTrue)]
    ascending: bool,

    /// Report skipped, unreadable directories on stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Directory to scan (defaults to the configured root, then the current directory).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

#[derive(Args)]
struct CleanArgs {
    /// Delete every discovered directory without the selection prompt.
    #[arg(long = "all", action = ArgAction::SetTrue)]
    all: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", action = ArgAction::SetTrue)]
    yes: bool,

    /// Report skipped, unreadable directories on stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Directory to scan (defaults to the configured root, then the current directory).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Set the default scan root.
    #[arg(long = "set-root", value_name = "PATH")]
    set_root: Option<PathBuf>,
}
