//! One-shot loading of the country dataset.
//!
//! The fetch runs on a tokio runtime while the UI keeps drawing. Its result is
//! handed to a callback exactly once; nothing is retried or re-fetched.

mod client;
mod error;

pub use client::RestCountriesClient;
pub use error::LoadError;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::catalog::CountryRecord;

/// Anything that can produce the full country list.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, LoadError>;
}

/// Start the single dataset fetch and report its outcome through `on_done`.
pub fn spawn_load<F>(
    runtime: &Handle,
    source: Arc<dyn CountrySource>,
    on_done: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<CountryRecord>, LoadError>) + Send + 'static,
{
    runtime.spawn(async move {
        let result = source.fetch_all().await;
        on_done(result);
    })
}
