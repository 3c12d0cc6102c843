//! Gateway defaults for query parameters.

use serde::{Deserialize, Serialize};

/// Defaults applied when a query parameter is missing, unparsable or not
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Levels per side in a book snapshot.
    pub default_limit: usize,
    /// Page of the order listing.
    pub default_page: usize,
    /// Orders per listing page.
    pub default_page_size: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_page: 1,
            default_page_size: 10,
        }
    }
}

impl GatewayConfig {
    /// Parses a raw query value, falling back to `default`.
    pub fn positive_or(raw: Option<&str>, default: usize) -> usize {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(default)
    }
}
