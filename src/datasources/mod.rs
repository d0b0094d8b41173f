pub mod news_file;
pub mod openmeteo;
pub mod snapshot_file;

pub use news_file::load_news_feed;
pub use openmeteo::OpenMeteoClient;
pub use snapshot_file::SnapshotFileSource;

use crate::error::Result;
use crate::models::{Division, WeatherSnapshot};
use async_trait::async_trait;

/// Where weather snapshots come from. Either a complete snapshot or an error.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Current conditions plus the hourly/daily outlook for `district`,
    /// using `division`'s coordinates
    async fn fetch(&self, division: &Division, district: &str) -> Result<WeatherSnapshot>;

    async fn test_connection(&self) -> Result<bool>;
}
