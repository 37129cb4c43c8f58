//! `todo` command-line front end.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use todo_list_core::{list_action, ListConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Todo list client")]
struct Cli {
    /// Root URL of the todo API.
    #[arg(long, global = true, env = "TODO_API_ROOT", default_value = "http://localhost:8080")]
    api_root: String,

    /// Request deadline in seconds.
    #[arg(long, global = true, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List todo items.
    List {
        /// Display only active tasks.
        #[arg(short, long)]
        active: bool,
    },
}

impl Cli {
    fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::List { active } => {
                let config = ListConfig::new(&self.api_root)
                    .active(active)
                    .timeout(Duration::from_secs(self.timeout));
                tracing::debug!(api_root = %config.api_root, active, "listing items");

                let stdout = io::stdout();
                let mut out = stdout.lock();
                list_action(&mut out, &config)?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "list failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
