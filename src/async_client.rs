//! Async wrapper around [`OrderRollup`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so the blocking HTTP fetch never stalls
//! the event loop.
//!
//! # Example
//!
//! ```no_run
//! use order_rollup::AsyncOrderRollup;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = AsyncOrderRollup::builder().build().await.unwrap();
//!     let views = client.views().await.unwrap();
//!     println!("{} pivot rows", views.pivot.rows.len());
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, RollupError};
use crate::source::RecordSource;
use crate::{OrderRollup, OrderViews, PivotTable};

// ---------------------------------------------------------------------------
// AsyncOrderRollupBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncOrderRollup`] instance.
#[derive(Default)]
pub struct AsyncOrderRollupBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    source: Option<Box<dyn RecordSource>>,
}

impl AsyncOrderRollupBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source<S: RecordSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the async client on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncOrderRollup> {
        tokio::task::spawn_blocking(move || {
            let mut builder = OrderRollup::builder();
            if let Some(url) = &self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(source) = self.source {
                builder.source = Some(source);
            }
            Ok(AsyncOrderRollup {
                inner: Arc::new(builder.build()?),
            })
        })
        .await
        .map_err(|e| RollupError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncOrderRollup
// ---------------------------------------------------------------------------

/// Async wrapper around [`OrderRollup`].
///
/// The client holds no mutable state, so it is shared through an [`Arc`]
/// without a lock.
#[derive(Clone)]
pub struct AsyncOrderRollup {
    inner: Arc<OrderRollup>,
}

impl AsyncOrderRollup {
    pub fn builder() -> AsyncOrderRollupBuilder {
        AsyncOrderRollupBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use order_rollup::AsyncOrderRollup;
    /// # async fn example() -> order_rollup::Result<()> {
    /// # let client = AsyncOrderRollup::builder().build().await?;
    /// let totals = client.run(|c| c.monthly_totals()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&OrderRollup) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| RollupError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn views(&self) -> Result<OrderViews> {
        self.run(|c| c.views()).await
    }

    pub async fn pivot(&self) -> Result<PivotTable> {
        self.run(|c| c.pivot()).await
    }
}
