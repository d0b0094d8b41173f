use super::{Confidence, Severity};
use serde::{Deserialize, Serialize};

pub const NEWS_TYPE: &str = "news";

/// One article as it appears in a news feed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub headline: String,
    pub source: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub headline: String,
    pub bn_headline: String,
    pub source: String,
    pub published_at: String,
    pub url: String,
    pub district: String,
    pub category: String,
    #[serde(rename = "type")]
    pub news_type: String,
}

/// Bilingual context attached to a trusted article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsInsight {
    pub why_it_matters: String,
    pub bn_why_it_matters: String,
    pub who_is_affected: String,
    pub bn_who_is_affected: String,
    pub what_to_do: Vec<String>,
    pub bn_what_to_do: Vec<String>,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub news: NewsEntry,
    pub insight: NewsInsight,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsReport {
    pub items: Vec<NewsItem>,
}
