//! Record sources: where raw prediction rows come from.
//!
//! The engine itself never does I/O. A [`RecordSource`] hands it a snapshot of
//! raw records; the HTTP and file sources parse a JSON array of objects with
//! `Category`, `Year`, `Month`, `Day`, `IsHoliday` and
//! `PredictedOrderQuantity` keys.

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use crate::config;
use crate::error::Result;
use crate::models::RawOrderRecord;

/// Supplies a full snapshot of raw records on every call.
pub trait RecordSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<RawOrderRecord>>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// HttpSource
// ---------------------------------------------------------------------------

/// Fetches records with a blocking GET of `{base_url}/predict`.
pub struct HttpSource {
    url: Url,
    timeout: Duration,
    client: OnceLock<Client>,
}

impl HttpSource {
    /// Fails with `InvalidArgument` if `base_url` does not parse as an http(s) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url: config::predict_url(base_url)?,
            timeout,
            client: OnceLock::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Lazy HTTP client, created on first fetch.
    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<RawOrderRecord>> {
        info!("Fetching predictions from {}", self.url);
        let resp = self.client()?.get(self.url.clone()).send()?.error_for_status()?;
        let records: Vec<RawOrderRecord> = resp.json()?;
        debug!("{} returned {} records", self.url, records.len());
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("http({})", self.url)
    }
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// Reads records from a local JSON file holding the same array the HTTP endpoint serves.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<RawOrderRecord>> {
        let text = fs::read_to_string(&self.path)?;
        let records: Vec<RawOrderRecord> = serde_json::from_str(&text)?;
        debug!("{} holds {} records", self.path.display(), records.len());
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file({})", self.path.display())
    }
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// Serves a fixed in-memory record set.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawOrderRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RawOrderRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self) -> Result<Vec<RawOrderRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static({} records)", self.records.len())
    }
}
