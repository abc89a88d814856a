//! Public client surface + builder.
//!
//! One shared `reqwest::Client` plus the three provider base URLs. Base URLs
//! are overridable so tests can point every endpoint at a mock server.

use crate::core::DashError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";
const DEFAULT_BASE_QUOTE_SUMMARY: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary/";
const DEFAULT_BASE_NEWS: &str = "https://finance.yahoo.com/";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

/// HTTP client shared by all endpoint modules. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DashClient {
    http: Client,
    base_chart: Url,
    base_quote_summary: Url,
    base_news: Url,
}

impl Default for DashClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DashClient {
    /// Create a new builder.
    pub fn builder() -> DashClientBuilder {
        DashClientBuilder::default()
    }

    /* -------- internal getters used by the endpoint modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_quote_summary(&self) -> &Url {
        &self.base_quote_summary
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
}

/// Builder for [`DashClient`].
#[derive(Default)]
pub struct DashClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_quote_summary: Option<Url>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl DashClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the quoteSummary API base.
    #[must_use]
    pub fn base_quote_summary(mut self, url: Url) -> Self {
        self.base_quote_summary = Some(url);
        self
    }

    /// Override the news base URL.
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if a default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<DashClient, DashError> {
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);
        let base_quote_summary = self
            .base_quote_summary
            .unwrap_or(Url::parse(DEFAULT_BASE_QUOTE_SUMMARY)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(DashClient {
            http: httpb.build()?,
            base_chart,
            base_quote_summary,
            base_news,
        })
    }
}
