// Imports
use crate::replay;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

///    overlay-cli{n}{n}
///    This program is free software; you can redistribute it{n}
///    and/or modify it under the terms of the GPL v3 or (at your option){n}
///    any later version.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
    /// Log gesture state transitions and skipped updates.{n}
    /// Overrides the filter set through RUST_LOG.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue, global = true)]
    pub(crate) verbose: bool,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Replays the pointer events of a script against a new overlay.{n}
    /// Prints the final overlay state as JSON.
    Replay {
        /// The replay script.
        script: PathBuf,
        /// An overlay config file. The defaults are used for missing fields.
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Command::Replay { script, config } => {
            let report = replay::run_replay(&script, config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Initializing logging failed, Err: {e:?}"))?;
    tracing::debug!("... logging initialized");
    Ok(())
}
