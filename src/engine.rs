//! Pure computation over the in-memory tracker state: entry upserts,
//! expenditure derivation, cycle statistics, the all-time ratchets and the
//! reset-to-history transaction. No I/O happens here.

use crate::error::{Error, Result};
use crate::model::{Amount, CycleMetrics, CycleSummary, Entry, TrackerState};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// What an upsert did to the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was appended.
    Inserted,
    /// An existing entry's remaining amount was replaced after confirmation.
    Replaced,
    /// The date collided and the caller declined the replacement; the cycle
    /// is unchanged.
    Declined,
}

/// Parses a calendar date in ISO `YYYY-MM-DD` form.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| Error::validation(format!("'{s}' is not a valid date (expected YYYY-MM-DD)")))
}

/// Inserts a balance observation, or replaces the amount of an existing entry
/// with the same date once `confirm_replace` agrees. The decision of how
/// consent is obtained belongs to the caller. Expenditures are recomputed for
/// the whole cycle afterward.
pub(crate) fn upsert_entry(
    cycle: &mut Vec<Entry>,
    date: NaiveDate,
    remaining: Amount,
    confirm_replace: impl FnOnce() -> bool,
) -> Result<UpsertOutcome> {
    if remaining.is_negative() {
        return Err(Error::validation(
            "the remaining amount must not be negative",
        ));
    }

    let outcome = match cycle.iter_mut().find(|entry| entry.date == date) {
        Some(existing) => {
            if !confirm_replace() {
                return Ok(UpsertOutcome::Declined);
            }
            // Only the amount is replaced; the date stays the natural key.
            existing.remaining_amount = remaining.round2();
            UpsertOutcome::Replaced
        }
        None => {
            cycle.push(Entry::new(date, remaining.round2()));
            UpsertOutcome::Inserted
        }
    };

    recompute_expenditures(cycle);
    Ok(outcome)
}

/// Sorts the cycle ascending by date and rederives every expenditure: the
/// earliest entry has no prior balance to diff against and is forced to zero,
/// every later entry is `round2(previous.remaining - this.remaining)`.
/// Idempotent.
pub(crate) fn recompute_expenditures(cycle: &mut [Entry]) {
    cycle.sort_by_key(|entry| entry.date);

    let mut previous: Option<Amount> = None;
    for entry in cycle.iter_mut() {
        entry.expenditure = match previous {
            None => Amount::ZERO,
            Some(prev) => (prev - entry.remaining_amount).round2(),
        };
        previous = Some(entry.remaining_amount);
    }
}

/// Computes the three aggregate statistics of a cycle. An empty cycle yields
/// all zeros.
pub(crate) fn cycle_metrics(cycle: &[Entry]) -> CycleMetrics {
    if cycle.is_empty() {
        return CycleMetrics::default();
    }

    let total = cycle
        .iter()
        .fold(Amount::ZERO, |sum, entry| sum + entry.expenditure);
    let highest_spend = cycle
        .iter()
        .map(|entry| entry.expenditure)
        .max()
        .unwrap_or_default();
    let highest_balance = cycle
        .iter()
        .map(|entry| entry.remaining_amount)
        .max()
        .unwrap_or_default();

    // The first entry contributes no expenditure day.
    let expense_days = cycle.len().saturating_sub(1);
    let daily_average = if expense_days == 0 {
        Amount::ZERO
    } else {
        Amount::new(total.value() / Decimal::from(expense_days as u64)).round2()
    };

    CycleMetrics {
        daily_average,
        highest_spend: highest_spend.round2(),
        highest_balance: highest_balance.round2(),
    }
}

/// Ratchets the all-time maxima up to the current cycle's peaks. No-op on an
/// empty cycle. Runs after every upsert and again inside [`reset_cycle`] so a
/// cycle's peak is captured even as it is archived.
pub(crate) fn update_all_time_maxima(state: &mut TrackerState) {
    if state.current_cycle.is_empty() {
        return;
    }

    let metrics = cycle_metrics(&state.current_cycle);
    state.highest_spend_ever = state.highest_spend_ever.max(metrics.highest_spend);
    state.highest_balance_ever = state.highest_balance_ever.max(metrics.highest_balance);
}

/// Archives the current cycle: builds a summary from the first and last entry
/// dates plus the cycle statistics, ratchets the maxima, appends the summary
/// to history and clears the cycle. One logical transaction; an empty cycle
/// fails with `EmptyCycle` and mutates nothing.
pub(crate) fn reset_cycle(state: &mut TrackerState) -> Result<CycleSummary> {
    let (start_date, end_date) = match (state.current_cycle.first(), state.current_cycle.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return Err(Error::EmptyCycle),
    };

    let metrics = cycle_metrics(&state.current_cycle);
    let summary = CycleSummary {
        start_date,
        end_date,
        average: metrics.daily_average,
        highest_spend: metrics.highest_spend,
        highest_balance: metrics.highest_balance,
    };

    update_all_time_maxima(state);
    state.history.push(summary);
    state.current_cycle.clear();
    Ok(summary)
}
