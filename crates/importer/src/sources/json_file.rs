use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::snapshot::Snapshot;
use crate::traits::SnapshotSource;
use crate::{ImporterError, Result};

/// Reads the roster and the gamification sheet from two JSON array files,
/// as exported from the spreadsheet API.
pub struct JsonFileSource {
    roster_path: PathBuf,
    records_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(roster_path: impl Into<PathBuf>, records_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            records_path: records_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for JsonFileSource {
    async fn load(&self) -> Result<Snapshot> {
        let roster = read_rows(&self.roster_path).await?;
        let records = read_rows(&self.records_path).await?;

        info!(
            "Loaded {} roster rows and {} gamification rows",
            roster.len(),
            records.len()
        );

        Ok(Snapshot { roster, records })
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

async fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    info!("Reading {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ImporterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    // An empty export means an empty sheet, not a broken one.
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|source| ImporterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
