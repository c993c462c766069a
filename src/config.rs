use reqwest::Url;
use std::time::Duration;

use crate::error::{Result, RollupError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const PREDICT_PATH: &str = "/predict";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Series label used for the all-category monthly chart.
pub const TOTAL_SERIES_LABEL: &str = "Order Quantity";

/// Parse `base` and point it at the prediction endpoint.
///
/// Only `http` and `https` URLs with a host are accepted. `/predict` is
/// appended to the base path (trailing slashes dropped); any query string on
/// `base` is kept.
pub fn predict_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| RollupError::InvalidArgument(format!("invalid base URL '{}': {}", base, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(RollupError::InvalidArgument(format!(
            "base URL must be http(s) with a host, got '{}'",
            base
        )));
    }
    let path = format!("{}{}", url.path().trim_end_matches('/'), PREDICT_PATH);
    url.set_path(&path);
    Ok(url)
}
