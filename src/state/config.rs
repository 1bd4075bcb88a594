use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::state::geometry::GridSize;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub grid_size: GridSize,
    /// Two presses on the same empty cell within this window start insert mode.
    pub double_click_ms: u64,
    /// Added to the measured text width before it is converted to cells.
    pub insert_padding: f64,
    pub font_family: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            double_click_ms: 300,
            insert_padding: 4.0,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl PageConfig {
    pub fn with_grid_size(width: u32, height: u32) -> Self {
        Self {
            grid_size: GridSize { width, height },
            ..Self::default()
        }
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    pub fn font_size(&self) -> f64 {
        f64::from(self.grid_size.height) * 7.0 / 10.0
    }

    /// CSS font shorthand used both for rendering and text measurement.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size(), self.font_family)
    }
}
