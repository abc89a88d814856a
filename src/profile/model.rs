use serde::Serialize;

/// Company metadata fields surfaced on the dashboard's financials tab.
///
/// The provider omits fields freely depending on instrument type and market,
/// so every field is optional; absence is a normal state the consumer renders
/// as "N/A".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<u64>,
    pub beta: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    /// Fraction, not percent (0.0044 for 0.44%).
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
}
