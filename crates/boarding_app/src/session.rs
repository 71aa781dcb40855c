//! Operator sessions.
//!
//! A session ties an operator to a run of the tool. Its id and operator name
//! are attached to every log line emitted while it works.

use anyhow::Result;
use boarding_engine::{BoardingEngine, BoardingError};
use boarding_model::{Operator, Selection};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::render;

/// Outcome counts of a scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub boarded: usize,
    pub rejected: usize,
}

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    operator: Operator,
}

impl Session {
    #[must_use]
    pub fn new(operator: Operator) -> Self {
        Self {
            id: Uuid::new_v4(),
            operator,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn span(&self) -> tracing::Span {
        info_span!("session", session_id = %self.id, operator = %self.operator.name)
    }

    /// Log, without enforcing, a selection outside the operator's list.
    pub fn note_selection(&self, selection: &Selection) {
        let leg_group = selection.leg_group();
        if !self.operator.is_authorized_for(&leg_group) {
            warn!(%leg_group, "selection is not among the operator's authorized trips");
        }
    }

    /// Check in one wristband per non-blank input line, printing each
    /// outcome and the refreshed dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` fails or the selection is invalid.
    pub async fn scan<R>(&self, engine: &BoardingEngine, selection: &Selection, input: R, json: bool) -> Result<ScanSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        async {
            self.note_selection(selection);
            // Fail fast on a bad selection before reading any input.
            engine.compute_snapshot(selection)?;
            info!(leg_group = %selection.leg_group(), direction = %selection.direction, "scanning wristbands");

            let mut summary = ScanSummary::default();
            let mut lines = input.lines();
            while let Some(line) = lines.next_line().await? {
                let wristband = line.trim();
                if wristband.is_empty() {
                    continue;
                }

                match engine.check_in(wristband, selection) {
                    Ok(record) => {
                        summary.boarded += 1;
                        if json {
                            println!("{}", serde_json::to_string(&record)?);
                        } else {
                            println!("{}", render::boarded(&record));
                        }
                    }
                    Err(err @ BoardingError::InvalidSelection(_)) => return Err(anyhow::Error::from(err)),
                    Err(err) => {
                        summary.rejected += 1;
                        warn!(wristband, %err, "check-in rejected");
                        println!("rejected {wristband}: {err}");
                    }
                }

                let snapshot = engine.compute_snapshot(selection)?;
                if json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                } else {
                    print!("{}", render::snapshot(&snapshot));
                }
            }

            info!(boarded = summary.boarded, rejected = summary.rejected, "scan finished");
            Ok::<_, anyhow::Error>(summary)
        }
        .instrument(self.span())
        .await
    }
}
