use std::env;

use serde::{Deserialize, Serialize};

/// Override locations for the frequency datasets; `None` uses the embedded data
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub english_path: Option<String>,
    pub french_path: Option<String>,
}

impl DatasetConfig {
    pub fn new() -> Self {
        Self {
            english_path: env::var("TIMESAURUS_EN_DATA").ok(),
            french_path: env::var("TIMESAURUS_FR_DATA").ok(),
        }
    }
}
