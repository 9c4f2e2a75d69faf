use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use guessing_game::{IoConsole, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Guess the secret number in as few tries as you can
struct Args {
    /// Fix the RNG seed to replay the same secrets
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        Self { seed: args.seed }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from(Args::parse());
    let rng = config.rng();
    info!("Starting session with seed {} ({:?})", rng.seed(), rng.state());

    let console = IoConsole::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, rng);
    let end = session.run().context("Console I/O failed")?;
    info!("Exiting after {:?}", end);

    Ok(())
}
