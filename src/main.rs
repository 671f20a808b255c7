use anyhow::Context;
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tortoise_launcher::commands::*;
use tortoise_launcher::core::print_error;

#[derive(Parser)]
#[command(name = "tortoise-launcher")]
#[command(about = "Launch TortoiseSVN, TortoiseGit and TortoiseHg for files and folders")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Settings file to use instead of the default one
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an action (explore, status, commit, sync, log, blame, diff, add, remove, revert)
    Launch {
        /// Action name
        action: String,
        /// Target paths; the first one is used
        paths: Vec<PathBuf>,
        /// File open in the host, used when no paths are given
        #[arg(long)]
        active: Option<PathBuf>,
    },
    /// Print the status code of each path
    Status {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Show which actions are offered for a path
    Menu { path: PathBuf },
    /// Show the version control system owning a path
    Detect { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = HostContext::load(cli.config.as_deref()).context("Failed to load settings")?;

    // Configure logging based on --debug flag or the debug setting
    if cli.debug || context.settings.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    context.log_source();

    let dispatcher = context.dispatcher();

    let result = match cli.command {
        Commands::Launch {
            action,
            paths,
            active,
        } => execute_launch(&dispatcher, &action, &paths, active),
        Commands::Status { paths } => execute_status(&dispatcher, &paths),
        Commands::Menu { path } => execute_menu(&dispatcher, &path),
        Commands::Detect { path } => execute_detect(&path),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
