//! Entry point for the pushover command.

use std::process::ExitCode;

use pushover::config::{
    Cli, Command, SearchPaths, ValidatedConfig, known_presets, load_documents,
    write_default_config,
};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// A thin wrapper around the testable components.
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle utility subcommands
    if let Some(command) = &cli.command {
        return handle_command(command, &cli);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    tracing::info!("{config}");

    run_application(config)
}

/// Dispatches the utility subcommands.
fn handle_command(command: &Command, cli: &Cli) -> ExitCode {
    match command {
        Command::Init { output } => handle_init(output),
        Command::Paths { only_existing } => {
            handle_paths(*only_existing);
            exit_code::SUCCESS
        }
        Command::Presets => handle_presets(cli),
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `paths` subcommand. Locations print lowest to highest
/// priority, matching the merge order.
fn handle_paths(only_existing: bool) {
    let paths = SearchPaths::from_env();

    if only_existing {
        for path in paths.existing() {
            println!("{}", path.display());
        }
    } else {
        for path in paths.candidates() {
            println!("{}", path.display());
        }
    }
}

/// Handles the `presets` subcommand.
fn handle_presets(cli: &Cli) -> ExitCode {
    match load_documents(cli.config.as_deref()) {
        Ok(docs) => {
            for name in known_presets(&docs) {
                println!("{name}");
            }
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs the send pipeline with the given configuration.
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
