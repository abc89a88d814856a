use serde::Deserialize;

use crate::core::wire::RawNum;

#[derive(Deserialize)]
pub(crate) struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub(crate) struct V10QuoteSummary {
    pub(crate) result: Option<Vec<V10Result>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub(crate) struct V10Error {
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct V10Result {
    #[serde(rename = "summaryProfile")]
    pub(crate) summary_profile: Option<SummaryProfile>,
    #[serde(rename = "summaryDetail")]
    pub(crate) summary_detail: Option<SummaryDetail>,
    #[serde(rename = "defaultKeyStatistics")]
    pub(crate) key_statistics: Option<KeyStatistics>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryProfile {
    pub(crate) sector: Option<String>,
    pub(crate) industry: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryDetail {
    #[serde(rename = "marketCap")]
    pub(crate) market_cap: Option<RawNum<u64>>,
    pub(crate) beta: Option<RawNum<f64>>,
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<RawNum<f64>>,
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum<f64>>,
    #[serde(rename = "dividendYield")]
    pub(crate) dividend_yield: Option<RawNum<f64>>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    pub(crate) fifty_two_week_high: Option<RawNum<f64>>,
    #[serde(rename = "fiftyTwoWeekLow")]
    pub(crate) fifty_two_week_low: Option<RawNum<f64>>,
}

#[derive(Deserialize)]
pub(crate) struct KeyStatistics {
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum<f64>>,
    pub(crate) beta: Option<RawNum<f64>>,
}
