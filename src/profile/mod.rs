//! Company metadata via the provider's quoteSummary v10 endpoint.

mod model;
mod wire;

pub use model::CompanyProfile;

use crate::core::{DashClient, DashError, net, wire::from_raw};

const MODULES: &str = "summaryProfile,summaryDetail,defaultKeyStatistics";

/// Fetch the company profile for `symbol`.
///
/// An unrecognized symbol yields a default (all-`None`) profile, not an
/// error; the dashboard renders absent fields as "N/A" either way.
///
/// # Errors
///
/// Returns a `DashError` on transport failure, a non-success HTTP status
/// other than 404, or a malformed response.
pub async fn fetch_profile(
    client: &DashClient,
    symbol: &str,
) -> Result<CompanyProfile, DashError> {
    let mut url = client.base_quote_summary().join(symbol)?;
    url.query_pairs_mut().append_pair("modules", MODULES);

    tracing::debug!(symbol, "requesting company profile");
    let resp = client.http().get(url.clone()).send().await?;
    if resp.status().as_u16() == 404 {
        tracing::debug!(symbol, "symbol not recognized by quoteSummary endpoint");
        return Ok(CompanyProfile::default());
    }
    let body = net::read_body(resp, "quote_summary").await?;

    let envelope: wire::V10Envelope = serde_json::from_str(&body)
        .map_err(|e| DashError::Data(format!("quoteSummary json parse error: {e}")))?;

    let summary = envelope
        .quote_summary
        .ok_or_else(|| DashError::Data("missing quoteSummary".into()))?;

    if let Some(err) = summary.error {
        tracing::debug!(
            symbol,
            description = err.description.as_deref().unwrap_or(""),
            "quoteSummary error, treating as empty profile"
        );
        return Ok(CompanyProfile::default());
    }

    let Some(first) = summary.result.and_then(|mut r| {
        if r.is_empty() {
            None
        } else {
            Some(r.swap_remove(0))
        }
    }) else {
        return Ok(CompanyProfile::default());
    };

    let mut out = CompanyProfile::default();
    if let Some(sp) = first.summary_profile {
        out.sector = sp.sector;
        out.industry = sp.industry;
    }
    if let Some(sd) = first.summary_detail {
        out.market_cap = from_raw(sd.market_cap);
        out.beta = from_raw(sd.beta);
        out.trailing_pe = from_raw(sd.trailing_pe);
        out.forward_pe = from_raw(sd.forward_pe);
        out.dividend_yield = from_raw(sd.dividend_yield);
        out.fifty_two_week_high = from_raw(sd.fifty_two_week_high);
        out.fifty_two_week_low = from_raw(sd.fifty_two_week_low);
    }
    // Key statistics backfill fields summaryDetail omits for some markets.
    if let Some(ks) = first.key_statistics {
        if out.forward_pe.is_none() {
            out.forward_pe = from_raw(ks.forward_pe);
        }
        if out.beta.is_none() {
            out.beta = from_raw(ks.beta);
        }
    }

    Ok(out)
}
