// Site Entry Types
//
// One entry describes a single VOD content-provider API endpoint.

use serde::{Deserialize, Serialize};

/// A single content-provider endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    /// API base URL through which the host queries the provider's
    /// content list. Stored verbatim, not parsed.
    pub api: String,

    /// Human-readable display label (may contain non-ASCII)
    pub name: String,
}

impl SiteEntry {
    pub fn new(api: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            name: name.into(),
        }
    }
}
