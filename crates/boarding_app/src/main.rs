//! # boarding_app — operator CLI
//!
//! Loads the trip catalog and registered passengers from a seed document,
//! then lists trips, checks wristbands in, or shows the boarding dashboard
//! for a trip leg and vehicle.
//!
//! ## Startup Sequence
//!
//! 1. Initialise logging (`RUST_LOG`, default `boarding_app=info`).
//! 2. Resolve the seed path: `--seed`, then `BOARDING_SEED`, then
//!    `data/seed.json`.
//! 3. Build the engine and open an operator session.
//! 4. Run the subcommand.

mod cli;
mod render;
mod session;

use anyhow::{Context, Result};
use boarding_engine::{BoardingEngine, EngineConfig, SeedDocument};
use boarding_model::Operator;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{Instrument, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("boarding_app=info".parse()?)
                .add_directive("boarding_engine=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(path) = &cli.seed {
        config = config.with_seed_path(path.clone());
    }

    let seed = SeedDocument::load(&config.seed_path)
        .with_context(|| format!("loading seed {}", config.seed_path.display()))?;
    let operator = seed
        .operator(&cli.operator)
        .cloned()
        .unwrap_or_else(|| Operator::new(cli.operator.clone()));
    let (catalog, store) = seed.into_parts()?;
    let engine = BoardingEngine::new(catalog, store).with_config(config);

    let session = Session::new(operator);
    info!(
        session_id = %session.id(),
        operator = %session.operator().name,
        trips = engine.catalog().len(),
        "session started"
    );

    run(&engine, &session, cli.command, cli.json)
        .instrument(session.span())
        .await
}

async fn run(engine: &BoardingEngine, session: &Session, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Trips { direction } => {
            let trips = engine.catalog().choices(direction);
            if json {
                println!("{}", serde_json::to_string_pretty(&trips)?);
            } else {
                print!("{}", render::trips(&trips));
            }
        }
        Command::Snapshot(args) => {
            let selection = args.to_selection();
            session.note_selection(&selection);
            let snapshot = engine.compute_snapshot(&selection)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", render::snapshot(&snapshot));
            }
        }
        Command::CheckIn { wristband, selection } => {
            let selection = selection.to_selection();
            session.note_selection(&selection);
            let record = engine.check_in(&wristband, &selection)?;
            let snapshot = engine.compute_snapshot(&selection)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", render::boarded(&record));
                print!("{}", render::snapshot(&snapshot));
            }
        }
        Command::Scan(args) => {
            let selection = args.to_selection();
            let stdin = BufReader::new(tokio::io::stdin());
            session.scan(engine, &selection, stdin, json).await?;
        }
    }
    Ok(())
}
