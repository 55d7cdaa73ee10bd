use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated balance observation in the current cycle.
///
/// The `date` is the natural key: a cycle never holds two entries for the
/// same day. `expenditure` is derived by differencing consecutive balances
/// and is never set directly by the user.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub(crate) date: NaiveDate,
    pub(crate) remaining_amount: Amount,
    pub(crate) expenditure: Amount,
}

impl Entry {
    /// Creates an entry with a placeholder expenditure of zero; the real
    /// value is filled in by the expenditure recompute.
    pub(crate) fn new(date: NaiveDate, remaining_amount: Amount) -> Self {
        Self {
            date,
            remaining_amount,
            expenditure: Amount::ZERO,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn remaining_amount(&self) -> Amount {
        self.remaining_amount
    }

    pub fn expenditure(&self) -> Amount {
        self.expenditure
    }
}
