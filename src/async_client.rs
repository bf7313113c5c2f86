//! Async wrapper around [`CollectionSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Sidecar calls are short blocking HTTP requests and the pipeline is
//! CPU-bound but fast, making this approach efficient.
//!
//! # Example
//!
//! ```no_run
//! use collection_sdk::AsyncCollectionSdk;
//!
//! async fn example() -> collection_sdk::Result<()> {
//!     let sdk = AsyncCollectionSdk::builder().build().await?;
//!
//!     // Run any sync SDK method via closure
//!     let entries = sdk.run(|s| s.collection().list()).await?;
//!     # let _ = entries;
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CollectionError, Result};
use crate::models::inventory::InventoryEntry;
use crate::models::price::PriceIndex;
use crate::{CollectionSdk, StoreBackend, Transport};

// ---------------------------------------------------------------------------
// AsyncCollectionSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCollectionSdk`] instance.
#[derive(Default)]
pub struct AsyncCollectionSdkBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
    store_backend: Option<Box<dyn StoreBackend>>,
}

impl AsyncCollectionSdkBuilder {
    /// Set the sidecar base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout for sidecar calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the transport entirely (tests).
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the preference-store backend.
    pub fn store_backend(mut self, backend: Box<dyn StoreBackend>) -> Self {
        self.store_backend = Some(backend);
        self
    }

    /// Build the async SDK. Store loading runs on the blocking thread pool
    /// so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncCollectionSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CollectionSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(transport) = self.transport {
                builder = builder.transport(transport);
            }
            if let Some(backend) = self.store_backend {
                builder = builder.store_backend(backend);
            }
            let sdk = builder.build()?;
            Ok(AsyncCollectionSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CollectionError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCollectionSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CollectionSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`CollectionSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncCollectionSdk {
    inner: Arc<Mutex<CollectionSdk>>,
}

impl AsyncCollectionSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCollectionSdkBuilder {
        AsyncCollectionSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&CollectionSdk` reference and should return
    /// a `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CollectionSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CollectionError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CollectionError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the normalized inventory asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run).
    pub async fn inventory(&self) -> Result<Vec<InventoryEntry>> {
        self.run(|s| s.collection().list()).await
    }

    /// Fetch prices and build the lookup index asynchronously.
    pub async fn price_index(&self) -> Result<PriceIndex> {
        self.run(|s| s.collection().price_index()).await
    }

    /// Close the SDK, releasing all resources.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| CollectionError::InvalidArgument("SDK lock poisoned".into()))?;
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| CollectionError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
