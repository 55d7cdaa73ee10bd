use crate::commands::{currency, signed_currency, Out};
use crate::model::CycleSummary;
use crate::tracker::DisplayMetrics;
use crate::Tracker;
use anyhow::Result;

/// Archives the current cycle. The `yes` flag is the user's confirmation
/// decision; without it nothing is touched.
pub async fn reset(tracker: &mut Tracker, yes: bool) -> Result<Out<CycleSummary>> {
    if !yes {
        return Ok(Out::new_message(
            "This archives the current cycle and clears its entries. Pass --yes to confirm.",
        ));
    }

    let summary = tracker.reset_cycle().await?;
    Ok(Out::new(
        format!(
            "Archived cycle {} to {} (average daily spend {}).",
            summary.start_date(),
            summary.end_date(),
            currency(summary.average())
        ),
        summary,
    ))
}

/// Shows the current cycle's entries followed by its statistics and the
/// all-time records.
pub fn status(tracker: &Tracker) -> Result<Out<DisplayMetrics>> {
    let metrics = tracker.display_metrics()?;
    let entries = tracker.entries()?;

    let mut lines = Vec::new();
    if entries.is_empty() {
        lines.push("No entries yet.".to_string());
    } else {
        lines.push(format!(
            "{:<12} {:>16} {:>16}",
            "Date", "Remaining", "Spent"
        ));
        for entry in entries {
            lines.push(format!(
                "{:<12} {:>16} {:>16}",
                entry.date(),
                currency(entry.remaining_amount()),
                signed_currency(entry.expenditure())
            ));
        }
    }
    lines.push(String::new());
    lines.push(format!("Daily average:       {}", currency(metrics.daily_average)));
    lines.push(format!("Highest spend:       {}", currency(metrics.highest_spend)));
    lines.push(format!("Highest balance:     {}", currency(metrics.highest_balance)));
    lines.push(format!(
        "All-time top spend:  {}",
        currency(metrics.highest_spend_ever)
    ));
    lines.push(format!(
        "All-time top balance: {}",
        currency(metrics.highest_balance_ever)
    ));

    Ok(Out::new(lines.join("\n"), metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_entry;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_reset_without_yes_is_refused() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();

        let out = reset(&mut tracker, false).await.unwrap();
        assert!(out.message().contains("--yes"));
        assert_eq!(tracker.entries().unwrap().len(), 1);
        assert!(tracker.history().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_with_yes_archives() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();
        add_entry(&mut tracker, Some("2025-03-02"), "70", false)
            .await
            .unwrap();

        let out = reset(&mut tracker, true).await.unwrap();
        assert!(out.message().contains("Archived cycle"));
        assert!(tracker.entries().unwrap().is_empty());
        assert_eq!(tracker.history().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_status_empty_cycle() {
        let env = TestEnv::new();
        let tracker = env.unlocked_tracker().await;
        let out = status(&tracker).unwrap();
        assert!(out.message().contains("No entries yet."));
        assert!(out.message().contains("Rs 0.00"));
    }

    #[tokio::test]
    async fn test_status_lists_entries_and_metrics() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();
        add_entry(&mut tracker, Some("2025-03-02"), "70", false)
            .await
            .unwrap();

        let out = status(&tracker).unwrap();
        assert!(out.message().contains("2025-03-01"));
        assert!(out.message().contains("+Rs 30.00"));
        assert!(out.message().contains("Daily average:"));
        assert!(out.structure().is_some());
    }
}
