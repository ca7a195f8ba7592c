//! ec-core binary entry point.

use clap::Parser;
use ec_common::OutputFormat;
use ec_core::{pipeline, Cli, Commands, ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_env("EC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(run(cli).as_i32());
}

fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Commands::Analyze(args) => match pipeline::run_analyze(&args) {
            Ok(summary) => match args.format {
                OutputFormat::Text => {
                    print!("{}", summary.render_text());
                    ExitCode::Clean
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&summary) {
                    Ok(json) => {
                        println!("{json}");
                        ExitCode::Clean
                    }
                    Err(e) => {
                        error!("summary serialization failed: {e}");
                        ExitCode::InternalError
                    }
                },
            },
            Err(err) => {
                error!(code = err.code(), "{err}");
                ExitCode::from_error(&err)
            }
        },
        Commands::Synth(args) => match pipeline::run_synth(&args) {
            Ok(()) => ExitCode::Clean,
            Err(err) => {
                error!(code = err.code(), "{err}");
                ExitCode::from_error(&err)
            }
        },
    }
}
