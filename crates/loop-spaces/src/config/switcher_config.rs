use crate::config::{default_switcher_height, default_switcher_width};

use serde::{Deserialize, Serialize};

/// Switcher panel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitcherConfig {
    /// Panel width in logical pixels.
    #[serde(default = "default_switcher_width")]
    pub width: u32,

    /// Panel height in logical pixels.
    #[serde(default = "default_switcher_height")]
    pub height: u32,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            width: default_switcher_width(),
            height: default_switcher_height(),
        }
    }
}
