use crate::core::DashError;

/// Check the response status and read the body as text.
pub(crate) async fn read_body(resp: reqwest::Response, endpoint: &str) -> Result<String, DashError> {
    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    let text = resp.text().await?;
    tracing::debug!(endpoint, bytes = text.len(), "provider response");
    Ok(text)
}
