//! Command-line interface entry point for `SyllabusTree`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use syllabus_tree::config::Config;
use syllabus_tree::info;
use syllabus_tree::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Overrides apply to this run; `config` subcommands edit the stored file
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Classes => commands::classes::run(&config),
        Command::Show {
            class,
            format,
            output,
        } => {
            commands::show::run(class.as_deref(), &format, output.as_deref(), &config);
        }
        Command::Session {
            class,
            script,
            render,
            format,
        } => {
            commands::session::run(
                class.as_deref(),
                script.as_deref(),
                render,
                &format,
                &config,
            );
        }
    }
}
