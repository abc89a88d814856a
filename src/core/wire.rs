use serde::Deserialize;

/// The quote-summary endpoint encodes numbers as `{"raw": 1.23, "fmt": "1.23"}`
/// objects; only the raw value is of interest here.
#[derive(Deserialize, Clone, Copy)]
pub struct RawNum<T> {
    pub(crate) raw: Option<T>,
}

pub fn from_raw<T>(raw: Option<RawNum<T>>) -> Option<T> {
    raw.and_then(|n| n.raw)
}
