use crate::args::ExportFormat;
use crate::commands::Out;
use crate::{utils, Tracker};
use anyhow::Result;
use std::path::Path;

/// Produces the JSON or CSV export. With `--out` the payload is written to a
/// file; otherwise it goes to stdout so it can be piped.
pub async fn export(
    tracker: &Tracker,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<Out<()>> {
    let payload = match format {
        ExportFormat::Json => tracker.export_json()?,
        ExportFormat::Csv => tracker.export_csv()?,
    };

    match out {
        Some(path) => {
            utils::write(path, &payload).await?;
            Ok(Out::new_message(format!(
                "Wrote the {format} export to {}.",
                path.display()
            )))
        }
        None => {
            println!("{payload}");
            Ok(Out::new_message(format!("Printed the {format} export.")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_entry, reset};
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_export_csv_to_file() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();
        reset(&mut tracker, true).await.unwrap();

        let out_path = env.home().join("history.csv");
        export(&tracker, ExportFormat::Csv, Some(&out_path))
            .await
            .unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert!(written.starts_with("startDate,endDate,average,highestSpend,highestBalance"));
        assert!(written.contains("2025-03-01"));
    }

    #[tokio::test]
    async fn test_export_json_to_file() {
        let env = TestEnv::new();
        let mut tracker = env.unlocked_tracker().await;
        add_entry(&mut tracker, Some("2025-03-01"), "100", false)
            .await
            .unwrap();

        let out_path = env.home().join("backup.json");
        export(&tracker, ExportFormat::Json, Some(&out_path))
            .await
            .unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["currentCycle"].as_array().unwrap().len(), 1);
    }
}
