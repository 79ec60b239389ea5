use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use timesaurus_config::Config;

/// Load a JSON config file; missing fields take their defaults
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Config file when given, otherwise environment-derived defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => {
            tracing::debug!("No config file given, using environment");
            Ok(Config::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/timesaurus.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/timesaurus.json"));
    }

    #[test]
    fn reads_partial_file() {
        let path = std::env::temp_dir().join(format!("timesaurus-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"decade": 1950, "ui": {"chart_width": 10}}"#).unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.decade, 1950);
        assert_eq!(config.ui.chart_width, 10);
        assert_eq!(config.language, "en");
    }
}
