//! Order rollup SDK for Rust.
//!
//! Turns a flat list of dated, categorized predicted order quantities into the
//! three views a dashboard needs:
//!
//! - a month-level total across all categories ([`rollup::monthly_totals`]),
//! - a month x category total ([`rollup::monthly_category_totals`]),
//! - a date x category pivot table with row totals and a holiday marker
//!   ([`pivot::date_pivot`]).
//!
//! The aggregation functions are pure and synchronous. [`OrderRollup`] wires
//! them to a [`RecordSource`] (by default the `/predict` HTTP endpoint).
//!
//! # Quick start
//!
//! ```no_run
//! use order_rollup::OrderRollup;
//!
//! let client = OrderRollup::builder()
//!     .base_url("http://127.0.0.1:5000")
//!     .build()
//!     .unwrap();
//!
//! let views = client.views().unwrap();
//! for row in &views.pivot.rows {
//!     println!("{} total={}", row.date_key, row.formatted_total());
//! }
//! ```
//!
//! Or without any I/O:
//!
//! ```rust
//! use order_rollup::{engine, RawOrderRecord};
//!
//! let raw = vec![
//!     RawOrderRecord::new("A", 2024, 1, 1, 1, 10.0),
//!     RawOrderRecord::new("B", 2024, 1, 1, 0, 5.0),
//! ];
//! let totals = engine::monthly_total_rollup(&raw).unwrap();
//! assert_eq!(totals[0].period.to_string(), "2024-1");
//! assert_eq!(totals[0].total, 15.0);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod models;
pub mod normalize;
pub mod pivot;
pub mod rollup;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncOrderRollup;
pub use engine::OrderViews;
pub use error::{Result, RollupError, ValidationError};
pub use models::{
    CategorySeries, DateKey, HolidayFlag, MonthlyCategoryTotal, MonthlyTotal, OrderRecord,
    PeriodKey, PivotCell, PivotRow, PivotTable, RawOrderRecord, SeriesDataset,
};
pub use source::{HttpSource, JsonFileSource, RecordSource, StaticSource};

use log::debug;
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// OrderRollupBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OrderRollup`] client.
///
/// Use [`OrderRollup::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](OrderRollupBuilder::build).
pub struct OrderRollupBuilder {
    base_url: String,
    timeout: Duration,
    source: Option<Box<dyn RecordSource>>,
}

impl Default for OrderRollupBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            source: None,
        }
    }
}

impl OrderRollupBuilder {
    /// Set the prediction service base URL. Defaults to `http://127.0.0.1:5000`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the HTTP request timeout. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom record source instead of the HTTP endpoint.
    ///
    /// When set, `base_url` and `timeout` are ignored.
    pub fn source<S: RecordSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn build(self) -> Result<OrderRollup> {
        let source = match self.source {
            Some(source) => source,
            None => Box::new(HttpSource::new(&self.base_url, self.timeout)?),
        };
        debug!("OrderRollup using {}", source.describe());
        Ok(OrderRollup { source })
    }
}

// ---------------------------------------------------------------------------
// OrderRollup
// ---------------------------------------------------------------------------

/// Fetches a fresh record snapshot on every call and derives views from it.
///
/// Nothing is cached between calls.
pub struct OrderRollup {
    source: Box<dyn RecordSource>,
}

impl OrderRollup {
    pub fn builder() -> OrderRollupBuilder {
        OrderRollupBuilder::default()
    }

    /// Fetch the raw, unvalidated records.
    pub fn fetch_records(&self) -> Result<Vec<RawOrderRecord>> {
        self.source.fetch()
    }

    /// Fetch and normalize.
    pub fn records(&self) -> Result<Vec<OrderRecord>> {
        let raw = self.fetch_records()?;
        Ok(normalize::normalize(&raw)?)
    }

    /// Fetch once and compute all three views from that snapshot.
    pub fn views(&self) -> Result<OrderViews> {
        engine::derive_views(&self.fetch_records()?)
    }

    pub fn monthly_totals(&self) -> Result<Vec<MonthlyTotal>> {
        engine::monthly_total_rollup(&self.fetch_records()?)
    }

    pub fn monthly_category_totals(&self) -> Result<Vec<MonthlyCategoryTotal>> {
        engine::monthly_category_rollup(&self.fetch_records()?)
    }

    pub fn pivot(&self) -> Result<PivotTable> {
        engine::date_pivot_table(&self.fetch_records()?)
    }

    /// Month x category totals laid out as one chart series per category.
    pub fn category_series(&self) -> Result<CategorySeries> {
        Ok(chart::category_series(&self.monthly_category_totals()?))
    }

    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }
}

impl fmt::Display for OrderRollup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderRollup(source={})", self.source.describe())
    }
}
