//! # odm CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Mapping definition toolchain.
///
/// Validates field mapping definitions before they are handed to a
/// mapping engine.
#[derive(Parser, Debug)]
#[command(name = "odm", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate mapping definition files.
    Validate(odm_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    odm_cli::logging::init(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Validate(args) => {
            let summary = odm_cli::validate::run(&args, &mut std::io::stdout().lock())?;
            if summary.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
