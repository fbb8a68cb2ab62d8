//! The store provider.
//!
//! [`S3Provider`] owns the bucket registry and the configuration. The
//! operations themselves are implemented in the [`crate::ops`] submodules as
//! `handle_*` methods on this type.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::state::S3ServiceState;

/// In-memory S3-compatible store.
///
/// All fields are `Arc`-wrapped for cheap cloning and shared ownership
/// across threads.
///
/// # Examples
///
/// ```
/// use s3shelf_core::{S3Provider, StoreConfig};
///
/// let provider = S3Provider::new(StoreConfig::default());
/// assert_eq!(provider.config().default_max_keys, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct S3Provider {
    /// Bucket and object state.
    pub(crate) state: Arc<S3ServiceState>,
    /// Provider configuration.
    pub(crate) config: Arc<StoreConfig>,
}

impl Default for S3Provider {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl S3Provider {
    /// Create a provider with empty state.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            state: Arc::new(S3ServiceState::new()),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the store state.
    #[must_use]
    pub fn state(&self) -> &S3ServiceState {
        &self.state
    }

    /// Returns a reference to the provider configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Remove every bucket and object.
    pub fn reset(&self) {
        self.state.reset();
    }
}
