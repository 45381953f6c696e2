//! Widget configuration.
//!
//! Deserializable from TOML with per-field defaults, so an integrator can
//! override only what they need. Validation happens once, at construction
//! of a presentation, converting the raw page size into a `NonZeroUsize`
//! that the partitioner can trust.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShopfrontError};

fn default_page_size() -> usize {
    5
}

fn default_idle_timeout_secs() -> u64 {
    900
}

/// Tunables for one shop widget.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Items shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Idle seconds after which a session is collectable.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

impl WidgetConfig {
    /// Validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::InvalidPageSize`] for a zero page size.
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or(ShopfrontError::InvalidPageSize { given: self.page_size })
    }

    /// Idle timeout as a [`Duration`].
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
