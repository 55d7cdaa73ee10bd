use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a finished cycle, taken at reset time.
///
/// Once appended to the history log a summary is never mutated. Field names
/// serialize in camelCase to match the persisted document and the CSV export
/// header.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) average: Amount,
    pub(crate) highest_spend: Amount,
    pub(crate) highest_balance: Amount,
}

impl CycleSummary {
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Mean daily expenditure over the cycle's expense days.
    pub fn average(&self) -> Amount {
        self.average
    }

    pub fn highest_spend(&self) -> Amount {
        self.highest_spend
    }

    pub fn highest_balance(&self) -> Amount {
        self.highest_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_camel_case() {
        let summary = CycleSummary {
            start_date: "2025-03-01".parse().unwrap(),
            end_date: "2025-03-10".parse().unwrap(),
            average: "15".parse().unwrap(),
            highest_spend: "30".parse().unwrap(),
            highest_balance: "100".parse().unwrap(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"startDate":"2025-03-01","endDate":"2025-03-10","average":15,"highestSpend":30,"highestBalance":100}"#
        );
        let back: CycleSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
