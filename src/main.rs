use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use bundle_restore::cli::{handle_restore_command, handle_validate_command, RestoreOptions};
use bundle_restore::config::{paths::RestorePaths, settings::Settings};
use bundle_restore::telemetry;

#[derive(Parser)]
#[command(
    name = "bundle-restore",
    version,
    about = "Restore backed-up course data bundles into a store",
    long_about = "bundle-restore walks a backup folder with one directory per backup \
                  source, loads every data bundle it finds and re-creates the records \
                  in the store. Failed files and records are reported and skipped; \
                  the run always continues."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backup folder to restore from (defaults to <base>/Backup)
    #[arg(long, global = true, value_name = "DIR")]
    backup_dir: Option<PathBuf>,

    /// Store folder to restore into (defaults to <base>/store)
    #[arg(long, global = true, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    /// Write the run report to this file instead of the reports folder
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "no_report")]
    report: Option<PathBuf>,

    /// Do not write a run report
    #[arg(long, global = true)]
    no_report: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Restore every bundle in the backup folder (default)
    Restore,

    /// Load and summarize every bundle without writing the store
    Validate,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RestorePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    telemetry::init(&telemetry::filter_directive(
        &settings.log_filter,
        cli.verbose,
        cli.quiet,
    ));

    let options = RestoreOptions::resolve(
        &paths,
        &settings,
        cli.backup_dir,
        cli.store_dir,
        cli.report,
        cli.no_report,
    );

    match cli.command.unwrap_or(Commands::Restore) {
        Commands::Restore => {
            handle_restore_command(&paths, &options)?;
        }
        Commands::Validate => {
            handle_validate_command(&options.backup_dir);
        }
        Commands::Config { save } => {
            println!("bundle-restore Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Backup directory: {}", options.backup_dir.display());
            println!("Store directory:  {}", options.store_dir.display());
            println!("Reports:          {}", paths.reports_dir().display());
            println!();
            println!("Settings:");
            println!("  Log filter:   {}", settings.log_filter);
            println!("  Write report: {}", settings.write_report);
            if save {
                settings.save(&paths)?;
                println!();
                println!("Settings saved to {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}
