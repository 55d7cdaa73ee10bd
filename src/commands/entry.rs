use crate::commands::Out;
use crate::tracker::DisplayMetrics;
use crate::{Tracker, UpsertOutcome};
use anyhow::Result;

/// Records the remaining balance for a date. The `overwrite` flag is the
/// user's standing answer to the date-collision question; without it an
/// existing entry is left alone.
pub async fn add_entry(
    tracker: &mut Tracker,
    date: Option<&str>,
    amount: &str,
    overwrite: bool,
) -> Result<Out<DisplayMetrics>> {
    let date = match date {
        Some(date) => date.to_string(),
        None => today(),
    };

    let outcome = tracker
        .add_or_replace_entry(&date, amount, || overwrite)
        .await?;

    let out = match outcome {
        UpsertOutcome::Inserted => Out::new(
            format!("Recorded balance for {date}."),
            tracker.display_metrics()?,
        ),
        UpsertOutcome::Replaced => Out::new(
            format!("Replaced the balance recorded for {date}."),
            tracker.display_metrics()?,
        ),
        UpsertOutcome::Declined => Out::new_message(format!(
            "An entry for {date} already exists; pass --overwrite to replace it."
        )),
    };
    Ok(out)
}

/// Today in the local timezone, ISO formatted.
fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_add_entry_defaults_to_today() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        let out = add_entry(&mut tracker, None, "120", false).await.unwrap();
        assert!(out.message().contains(&today()));
        assert_eq!(tracker.entries().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_entry_collision_without_overwrite() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();
        let out = add_entry(&mut tracker, Some("2025-03-01"), "90", false)
            .await
            .unwrap();
        assert!(out.message().contains("--overwrite"));
        assert_eq!(
            tracker.entries().unwrap()[0].remaining_amount(),
            "100".parse().unwrap()
        );
    }

    #[tokio::test]
    async fn test_add_entry_collision_with_overwrite() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();
        let out = add_entry(&mut tracker, Some("2025-03-01"), "90", true)
            .await
            .unwrap();
        assert!(out.message().contains("Replaced"));
        assert_eq!(
            tracker.entries().unwrap()[0].remaining_amount(),
            "90".parse().unwrap()
        );
    }
}
