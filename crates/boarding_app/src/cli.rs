//! Command-line arguments.

use std::path::PathBuf;

use boarding_model::time::parse_departure;
use boarding_model::{Direction, Selection};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "boarding_app", about = "Track passenger boarding on scheduled round trips")]
pub struct Cli {
    /// Seed document with trips and registered passengers
    /// (defaults to `BOARDING_SEED`, then `data/seed.json`)
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Name of the operator running this session
    #[arg(short, long, default_value = "operator")]
    pub operator: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the trips that can be selected for a direction
    Trips {
        #[arg(short, long, value_parser = parse_direction, default_value = "OUTBOUND")]
        direction: Direction,
    },
    /// Show the dashboard for a selection
    Snapshot(SelectionArgs),
    /// Check one wristband in and show the refreshed dashboard
    CheckIn {
        /// Wristband identifier
        wristband: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Read wristband identifiers from stdin, one per line, checking each in
    Scan(SelectionArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    /// OUTBOUND or RETURN
    #[arg(short, long, value_parser = parse_direction)]
    pub direction: Direction,

    /// Route label, e.g. "BRASÍLIA → BASE"
    #[arg(long)]
    pub destination: String,

    /// Outbound departure of the round trip, `yyyy-MM-dd HH:mm`
    #[arg(long, value_parser = parse_departure_arg)]
    pub departure: NaiveDateTime,

    /// Vehicle being boarded
    #[arg(long)]
    pub vehicle: String,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> Selection {
        Selection::new(
            self.direction,
            self.destination.clone(),
            self.departure,
            self.vehicle.clone(),
        )
    }
}

fn parse_direction(raw: &str) -> Result<Direction, String> {
    raw.parse()
}

fn parse_departure_arg(raw: &str) -> Result<NaiveDateTime, String> {
    parse_departure(raw).map_err(|e| format!("expected `yyyy-MM-dd HH:mm`: {e}"))
}
