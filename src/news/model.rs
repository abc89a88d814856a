use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a single news article for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    /// The headline of the article.
    pub title: String,
    /// The publisher of the article (e.g., "Reuters", "Associated Press").
    pub publisher: Option<String>,
    /// Publication time, when the provider supplied a parseable one.
    pub published_at: Option<DateTime<Utc>>,
    /// Snippet/summary text for the article body.
    pub summary: Option<String>,
    /// "Read more" link: the click-through URL when present, else the
    /// canonical URL, else absent.
    pub link: Option<String>,
}
