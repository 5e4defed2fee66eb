use anyhow::Result;
use clap::{Parser, Subcommand};

use lumalite::{cli, config, logging};

#[derive(Parser)]
#[command(
    name = "lumalite",
    version,
    about = "Supportive AI companion for check-ins and brain dumps"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show all saved brain dumps, newest first
    History,
    /// Show the most recent brain dump
    Latest,
    /// Delete a saved brain dump by id
    Forget {
        /// Entry id as shown by `history`
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::LumaConfig::load()?;
    let _log_guards = logging::init_tracing(&config)?;

    match cli.command {
        None => cli::interactive(&config).await?,
        Some(command) => {
            let repository = cli::open_repository(&config)?;
            let mut out = std::io::stdout();
            match command {
                Command::History => cli::history::history(&repository, &mut out)?,
                Command::Latest => cli::history::latest(&repository, &mut out)?,
                Command::Forget { id } => cli::history::forget(&repository, id, &mut out)?,
            }
        }
    }

    Ok(())
}
