//! The tracker facade that the presentation shell drives.
//!
//! `Tracker` owns the store, the in-memory document and the PIN gate for the
//! session. Every mutation is written through to disk immediately; a failed
//! save is reported but the in-memory mutation is kept, so memory and disk
//! may diverge until the next successful save.

use crate::auth::{self, GateState};
use crate::engine::{self, UpsertOutcome};
use crate::error::{Error, Result};
use crate::model::{Amount, CycleSummary, Entry, TrackerState};
use crate::store::Store;
use serde::Serialize;
use std::path::PathBuf;

/// The numbers the shell shows on its dashboard: the current cycle's
/// statistics plus the two all-time ratchets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    pub daily_average: Amount,
    pub highest_spend: Amount,
    pub highest_balance: Amount,
    pub highest_spend_ever: Amount,
    pub highest_balance_ever: Amount,
}

pub struct Tracker {
    store: Store,
    state: TrackerState,
    gate: GateState,
}

impl Tracker {
    /// Opens the data home and loads the persisted document, defaulting
    /// anything malformed. The gate starts locked.
    pub async fn open(home: impl Into<PathBuf>) -> Result<Self> {
        let store = Store::open(home).await?;
        let state = store.load().await;
        let gate = GateState::for_stored_hash(state.pin_hash());
        Ok(Self { store, state, gate })
    }

    pub fn is_pin_configured(&self) -> bool {
        self.state.pin_hash.is_some()
    }

    pub fn gate(&self) -> GateState {
        self.gate
    }

    /// Creates the PIN, stores its digest and unlocks the session. Only
    /// valid while no PIN exists; changing a PIN later is not supported.
    pub async fn create_pin(&mut self, candidate: &str, confirmation: &str) -> Result<()> {
        if self.is_pin_configured() {
            return Err(Error::validation(
                "a PIN already exists; it cannot be changed",
            ));
        }
        let digest = auth::create_pin(candidate, confirmation).await?;
        self.state.pin_hash = Some(digest);
        self.gate = GateState::Unlocked;
        self.persist().await
    }

    /// Verifies the PIN and unlocks the session. A wrong well-formed PIN is
    /// an `Auth` error and leaves the gate untouched.
    pub async fn unlock(&mut self, candidate: &str) -> Result<()> {
        let Some(stored) = self.state.pin_hash.as_deref() else {
            return Err(Error::PinNotConfigured);
        };
        if auth::verify_pin(candidate, stored).await? {
            self.gate = GateState::Unlocked;
            Ok(())
        } else {
            Err(Error::Auth)
        }
    }

    /// Records the remaining balance for a date. A date that already has an
    /// entry is a collision; `confirm_replace` supplies the caller's
    /// decision. Validation failures mutate nothing.
    pub async fn add_or_replace_entry(
        &mut self,
        date: &str,
        amount: &str,
        confirm_replace: impl FnOnce() -> bool,
    ) -> Result<UpsertOutcome> {
        self.ensure_unlocked()?;
        let date = engine::parse_date(date)?;
        let amount: Amount = amount.parse()?;

        let outcome =
            engine::upsert_entry(&mut self.state.current_cycle, date, amount, confirm_replace)?;
        if outcome == UpsertOutcome::Declined {
            return Ok(outcome);
        }

        engine::update_all_time_maxima(&mut self.state);
        self.persist().await?;
        Ok(outcome)
    }

    /// Archives the current cycle into history and starts a fresh one. The
    /// confirmation decision belongs to the shell; by the time this runs the
    /// user has already consented.
    pub async fn reset_cycle(&mut self) -> Result<CycleSummary> {
        self.ensure_unlocked()?;
        let summary = engine::reset_cycle(&mut self.state)?;
        self.persist().await?;
        Ok(summary)
    }

    pub fn display_metrics(&self) -> Result<DisplayMetrics> {
        self.ensure_unlocked()?;
        let metrics = engine::cycle_metrics(self.state.current_cycle());
        Ok(DisplayMetrics {
            daily_average: metrics.daily_average,
            highest_spend: metrics.highest_spend,
            highest_balance: metrics.highest_balance,
            highest_spend_ever: self.state.highest_spend_ever,
            highest_balance_ever: self.state.highest_balance_ever,
        })
    }

    /// The current cycle's entries, sorted ascending by date.
    pub fn entries(&self) -> Result<&[Entry]> {
        self.ensure_unlocked()?;
        Ok(self.state.current_cycle())
    }

    /// Archived cycles in storage order, oldest first. Callers reverse for
    /// display.
    pub fn history(&self) -> Result<&[CycleSummary]> {
        self.ensure_unlocked()?;
        Ok(self.state.history())
    }

    /// The full document as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        self.ensure_unlocked()?;
        serde_json::to_string_pretty(&self.state).map_err(|e| Error::Export(e.to_string()))
    }

    /// The cycle history as CSV, oldest first, matching storage order.
    pub fn export_csv(&self) -> Result<String> {
        self.ensure_unlocked()?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "startDate",
                "endDate",
                "average",
                "highestSpend",
                "highestBalance",
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
        for summary in self.state.history() {
            writer
                .write_record([
                    summary.start_date().to_string(),
                    summary.end_date().to_string(),
                    summary.average().value().normalize().to_string(),
                    summary.highest_spend().value().normalize().to_string(),
                    summary.highest_balance().value().normalize().to_string(),
                ])
                .map_err(|e| Error::Export(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
    }

    fn ensure_unlocked(&self) -> Result<()> {
        if self.gate.is_unlocked() {
            Ok(())
        } else {
            Err(Error::Locked)
        }
    }

    async fn persist(&self) -> Result<()> {
        self.store.save(&self.state).await
    }
}
