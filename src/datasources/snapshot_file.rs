use super::WeatherSource;
use crate::error::{Result, SkyGuideError};
use crate::models::{Division, WeatherSnapshot};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a saved `WeatherSnapshot` JSON file instead of calling an API.
///
/// The district is filled in from the request when the file has none.
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<WeatherSnapshot> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SkyGuideError::DataSourceUnavailable(format!(
                "Snapshot file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl WeatherSource for SnapshotFileSource {
    fn name(&self) -> &'static str {
        "Snapshot file"
    }

    async fn fetch(&self, _division: &Division, district: &str) -> Result<WeatherSnapshot> {
        let mut snapshot = self.load().await?;
        if snapshot.district.is_empty() {
            snapshot.district = district.to_string();
        }
        Ok(snapshot)
    }

    async fn test_connection(&self) -> Result<bool> {
        Ok(self.load().await.is_ok())
    }
}
