use std::path::Path;

use timesaurus_core::{FrequencyTable, LoadError, StringTable};

pub struct EnglishLoader;

impl EnglishLoader {
    /// Load the embedded frequency table
    pub fn load_embedded() -> Result<FrequencyTable, LoadError> {
        let json = include_str!("../data/english_freq_pmw.json");
        tracing::info!("Loading embedded English frequency table...");
        let table = FrequencyTable::from_json(json)?;
        tracing::info!("Loaded {} English words", table.len());
        Ok(table)
    }

    /// Load the frequency table from `path`, falling back to the embedded
    /// table if the file cannot be used
    pub fn load_or_embedded(path: Option<&Path>) -> Result<FrequencyTable, LoadError> {
        let Some(path) = path else {
            return Self::load_embedded();
        };

        match FrequencyTable::from_file(path) {
            Ok(table) => Ok(table),
            Err(e) => {
                tracing::warn!("Failed to load English table from {}: {}", path.display(), e);
                tracing::warn!("Using embedded English table");
                Self::load_embedded()
            }
        }
    }

    pub fn load_strings() -> Result<StringTable, LoadError> {
        StringTable::from_json(include_str!("../data/en.json"))
    }
}
