//! Recent articles via the provider's news-stream endpoint.

mod model;
mod wire;

pub use model::NewsItem;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{DashClient, DashError, net};

/// How many articles to request per fetch. Truncation for display is the
/// consumer's concern; this just bounds the payload.
const DEFAULT_COUNT: u32 = 25;

#[derive(Serialize)]
struct ServiceConfig<'a> {
    #[serde(rename = "snippetCount")]
    snippet_count: u32,
    s: &'a [&'a str],
}

#[derive(Serialize)]
struct NewsPayload<'a> {
    #[serde(rename = "serviceConfig")]
    service_config: ServiceConfig<'a>,
}

/// Fetch recent news articles for `symbol`.
///
/// Ads and title-less entries are discarded; an item missing both URL fields
/// is kept with `link: None`.
///
/// # Errors
///
/// Returns a `DashError` on transport failure, a non-success HTTP status, or
/// a malformed response.
pub async fn fetch_news(client: &DashClient, symbol: &str) -> Result<Vec<NewsItem>, DashError> {
    let mut url = client.base_news().join("xhr/ncp")?;
    url.query_pairs_mut()
        .append_pair("queryRef", "latestNews")
        .append_pair("serviceKey", "ncp_fin");

    let payload = NewsPayload {
        service_config: ServiceConfig {
            snippet_count: DEFAULT_COUNT,
            s: &[symbol],
        },
    };

    tracing::debug!(symbol, "requesting news");
    let resp = client.http().post(url).json(&payload).send().await?;
    let body = net::read_body(resp, "news").await?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body)?;

    let articles = envelope
        .data
        .and_then(|d| d.ticker_stream)
        .and_then(|ts| ts.stream)
        .unwrap_or_default();

    let items = articles
        .into_iter()
        .filter_map(|raw| {
            if raw.ad.is_some() {
                return None;
            }
            let content = raw.content?;
            let title = content.title?;

            let published_at: Option<DateTime<Utc>> = content
                .pub_date
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc));

            let link = content
                .click_through_url
                .and_then(|u| u.url)
                .or_else(|| content.canonical_url.and_then(|u| u.url));

            Some(NewsItem {
                title,
                publisher: content.provider.and_then(|p| p.display_name),
                published_at,
                summary: content.summary,
                link,
            })
        })
        .collect();

    Ok(items)
}
