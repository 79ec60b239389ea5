use std::env;

use serde::{Deserialize, Serialize};

fn default_chart_width() -> u32 {
    40
}

fn default_show_line_chart() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Width in columns of the longest bar
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_show_line_chart")]
    pub show_line_chart: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let chart_width = env::var("TIMESAURUS_CHART_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_chart_width);

        Self {
            chart_width,
            show_line_chart: default_show_line_chart(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            chart_width: default_chart_width(),
            show_line_chart: default_show_line_chart(),
        }
    }
}
