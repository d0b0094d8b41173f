use crate::models::{
    Confidence, NewsArticle, NewsEntry, NewsInsight, NewsItem, NewsReport, Severity, NEWS_TYPE,
};
use chrono::{DateTime, Utc};

/// Outlets whose weather reporting is shown by default
pub const DEFAULT_TRUSTED_SOURCES: &[&str] = &[
    "BMD",
    "The Daily Star",
    "Prothom Alo",
    "The Daily Naya Diganta",
    "FFWC",
];

const HEADLINE_PREFIX_BN: &str = "সংবাদ: ";

/// Source names compare trimmed and case-insensitively
pub fn is_trusted(source: &str, trusted_sources: &[String]) -> bool {
    let source = source.trim();
    trusted_sources
        .iter()
        .any(|t| t.trim().eq_ignore_ascii_case(source))
}

/// Flood coverage is high severity; every other category is normal
pub fn severity_for_category(category: &str) -> Severity {
    if category.trim().eq_ignore_ascii_case("flood") {
        Severity::High
    } else {
        Severity::Normal
    }
}

fn news_insight(article: &NewsArticle) -> NewsInsight {
    NewsInsight {
        why_it_matters: format!("Affects the safety protocols in {}.", article.district),
        bn_why_it_matters: "এটি আপনার এলাকার নিরাপত্তার জন্য গুরুত্বপূর্ণ।".into(),
        who_is_affected: "Residents and travelers.".into(),
        bn_who_is_affected: "বাসিন্দা এবং ভ্রমণকারীরা।".into(),
        what_to_do: vec!["Stay alert".into(), "Follow the source link".into()],
        bn_what_to_do: vec!["সতর্ক থাকুন".into(), "লিঙ্কটি দেখুন".into()],
        confidence: Confidence::High,
    }
}

fn news_item(article: &NewsArticle, now: DateTime<Utc>) -> NewsItem {
    let published_at = article
        .published_at
        .clone()
        .unwrap_or_else(|| now.to_rfc3339());

    NewsItem {
        news: NewsEntry {
            headline: article.headline.clone(),
            bn_headline: format!("{}{}", HEADLINE_PREFIX_BN, article.headline),
            source: article.source.clone(),
            published_at,
            url: article.url.clone(),
            district: article.district.clone(),
            category: article.category.clone(),
            news_type: NEWS_TYPE.to_string(),
        },
        insight: news_insight(article),
        severity: severity_for_category(&article.category),
    }
}

/// Keep articles from trusted sources, in feed order, each with its insight
/// block. Articles without a publish time are stamped with `now`.
pub fn classify_news(
    articles: &[NewsArticle],
    trusted_sources: &[String],
    now: DateTime<Utc>,
) -> NewsReport {
    let items: Vec<NewsItem> = articles
        .iter()
        .filter(|a| is_trusted(&a.source, trusted_sources))
        .map(|a| news_item(a, now))
        .collect();

    tracing::debug!(
        kept = items.len(),
        dropped = articles.len() - items.len(),
        "Classified news feed"
    );

    NewsReport { items }
}
