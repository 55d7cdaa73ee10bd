use crate::commands::{currency, Out};
use crate::model::CycleSummary;
use crate::Tracker;
use anyhow::Result;

/// Lists archived cycles, newest first. Storage order stays oldest-first;
/// only the display is reversed.
pub fn history(tracker: &Tracker) -> Result<Out<Vec<CycleSummary>>> {
    let history = tracker.history()?;
    if history.is_empty() {
        return Ok(Out::new_message("No past cycles yet."));
    }

    let mut lines = vec![format!(
        "{:<12} {:<12} {:>14} {:>14} {:>16}",
        "Start", "End", "Average", "Top spend", "Top balance"
    )];
    for summary in history.iter().rev() {
        lines.push(format!(
            "{:<12} {:<12} {:>14} {:>14} {:>16}",
            summary.start_date(),
            summary.end_date(),
            currency(summary.average()),
            currency(summary.highest_spend()),
            currency(summary.highest_balance())
        ));
    }

    Ok(Out::new(lines.join("\n"), history.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_entry, reset};
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_history_empty() {
        let env = TestEnv::new();
        let tracker = env.unlocked_tracker().await;
        let out = history(&tracker).unwrap();
        assert!(out.message().contains("No past cycles yet."));
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;

        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();
        reset(&mut tracker, true).await.unwrap();
        add_entry(&mut tracker, Some("2025-04-01"), "80", false)
            .await
            .unwrap();
        reset(&mut tracker, true).await.unwrap();

        let out = history(&tracker).unwrap();
        let april = out.message().find("2025-04-01").unwrap();
        let march = out.message().find("2025-03-01").unwrap();
        assert!(april < march, "newest cycle should be listed first");

        // The structured payload keeps storage order.
        let structure = out.structure().unwrap();
        assert_eq!(structure[0].start_date().to_string(), "2025-03-01");
    }
}
