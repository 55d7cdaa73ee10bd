//! Reads and writes the persisted tracker document.
//!
//! The document is a single JSON file, `tracker_v1.json`, inside the data
//! home directory. Loading never fails: missing, unreadable or malformed
//! data falls back to defaults field by field so a damaged document loses as
//! little as possible. Saving replaces the whole file.

use crate::error::{Error, Result};
use crate::model::{Amount, CycleSummary, Entry, TrackerState};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

const STORE_FILE: &str = "tracker_v1.json";

/// Owns the location of the persisted document.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    root: PathBuf,
    document_path: PathBuf,
}

impl Store {
    /// Creates the data home directory if it does not exist and
    /// canonicalizes it.
    pub async fn open(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        fs::create_dir_all(&maybe_relative)
            .await
            .map_err(|e| Error::storage(&maybe_relative, e))?;
        let root = fs::canonicalize(&maybe_relative)
            .await
            .map_err(|e| Error::storage(&maybe_relative, e))?;
        let document_path = root.join(STORE_FILE);
        Ok(Self {
            root,
            document_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Loads the persisted document. A missing file yields the default
    /// state; anything else that goes wrong is logged and degrades to the
    /// default for the affected field rather than failing the load.
    pub async fn load(&self) -> TrackerState {
        let raw = match fs::read_to_string(&self.document_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return TrackerState::default(),
            Err(e) => {
                warn!(
                    "unable to read {}: {e}; starting from defaults",
                    self.document_path.display()
                );
                return TrackerState::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => merge_onto_defaults(value),
            Err(e) => {
                warn!(
                    "unable to parse {}: {e}; starting from defaults",
                    self.document_path.display()
                );
                TrackerState::default()
            }
        }
    }

    /// Persists the full document, replacing prior content entirely.
    pub async fn save(&self, state: &TrackerState) -> Result<()> {
        let data = serde_json::to_string_pretty(state)
            .map_err(|e| Error::storage(&self.document_path, std::io::Error::other(e)))?;
        fs::write(&self.document_path, data)
            .await
            .map_err(|e| Error::storage(&self.document_path, e))
    }
}

/// Merges a parsed document onto the default state field by field. A field
/// of the wrong shape is replaced with its default while the other valid
/// fields are preserved; unknown fields are ignored.
fn merge_onto_defaults(value: Value) -> TrackerState {
    let Value::Object(doc) = value else {
        warn!("persisted document is not an object; starting from defaults");
        return TrackerState::default();
    };

    TrackerState {
        pin_hash: field::<Option<String>>(&doc, "pinHash"),
        current_cycle: field::<Vec<Entry>>(&doc, "currentCycle"),
        history: field::<Vec<CycleSummary>>(&doc, "history"),
        highest_spend_ever: field::<Amount>(&doc, "highestSpendEver"),
        highest_balance_ever: field::<Amount>(&doc, "highestBalanceEver"),
    }
}

fn field<T>(doc: &Map<String, Value>, name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(value) = doc.get(name) else {
        return T::default();
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("persisted field '{name}' has the wrong shape ({e}); using its default");
            T::default()
        }
    }
}
