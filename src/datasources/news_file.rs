use crate::error::{Result, SkyGuideError};
use crate::models::NewsArticle;
use std::path::Path;

/// Read a JSON array of news articles.
///
/// A missing file means the feed is unavailable; an article without a
/// headline or source rejects the whole feed.
pub async fn load_news_feed(path: &Path) -> Result<Vec<NewsArticle>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        SkyGuideError::DataSourceUnavailable(format!("News feed {}: {}", path.display(), e))
    })?;

    let articles: Vec<NewsArticle> = serde_json::from_str(&content)?;

    if let Some(index) = articles
        .iter()
        .position(|a| a.headline.trim().is_empty() || a.source.trim().is_empty())
    {
        return Err(SkyGuideError::InvalidData(format!(
            "News feed {}: article {} has no headline or source",
            path.display(),
            index
        )));
    }

    tracing::debug!("Loaded {} articles from {:?}", articles.len(), path);
    Ok(articles)
}
