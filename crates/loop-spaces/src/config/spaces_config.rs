use crate::config::default_space_count;

use serde::{Deserialize, Serialize};

/// Space provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacesConfig {
    /// Number of spaces offered by the in-memory provider.
    #[serde(default = "default_space_count")]
    pub count: u32,
}

impl Default for SpacesConfig {
    fn default() -> Self {
        Self {
            count: default_space_count(),
        }
    }
}
