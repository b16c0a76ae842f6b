mod cmd_fetch;
mod cmd_pick;

use anyhow::{Context, Result};
use clap::Parser;
use survey_greet::StoreConfig;

const DOTENV: &str = ".env";

#[derive(Parser, Debug)]
#[command(name = "survey-greet")]
#[command(version)]
#[command(about = "Fetch survey responses, or print a random one")]
struct Cli {
    /// Download responses from the survey API and replace the local store
    #[arg(long)]
    fetch: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    load_dotenv()?;

    let store = StoreConfig::from_env()?;
    if cli.fetch {
        cmd_fetch::run(store)
    } else {
        cmd_pick::run(store)
    }
}

/// Read `./.env` into the environment if there is one. Parent directories
/// are not searched.
fn load_dotenv() -> Result<()> {
    match dotenvy::from_path(DOTENV) {
        Ok(()) => {
            log::debug!("loaded {}", DOTENV);
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}
