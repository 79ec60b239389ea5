use std::env;

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::ui::UiConfig;

pub mod dataset;
pub mod ui;

fn default_language() -> String {
    "en".to_string()
}

fn default_decade() -> u16 {
    2010
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub ui: UiConfig,

    /// Language active at startup ("en" or "fr")
    #[serde(default = "default_language")]
    pub language: String,
    /// Decade selected at startup
    #[serde(default = "default_decade")]
    pub decade: u16,
}

impl Config {
    pub fn new() -> Self {
        let language = env::var("TIMESAURUS_LANG").unwrap_or_else(|_| default_language());

        let decade = env::var("TIMESAURUS_DECADE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_decade);

        Config {
            dataset: DatasetConfig::new(),
            ui: UiConfig::new(),

            language,
            decade,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            ui: UiConfig::default(),
            language: default_language(),
            decade: default_decade(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"language":"fr"}"#).unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(config.decade, 2010);
        assert_eq!(config.ui.chart_width, 40);
        assert!(config.dataset.english_path.is_none());
    }

    #[test]
    fn nested_sections_are_optional() {
        let config: Config =
            serde_json::from_str(r#"{"dataset":{"french_path":"fr.json"},"ui":{}}"#).unwrap();
        assert_eq!(config.dataset.french_path.as_deref(), Some("fr.json"));
        assert_eq!(config.ui.chart_width, 40);
        assert_eq!(config.language, "en");
    }
}
