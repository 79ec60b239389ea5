use std::path::PathBuf;

use timesaurus_core::{BAR_SLOTS, FrequencyTable, Language, LanguagePack, LoadError, StringTable};

use crate::loader::EnglishLoader;

/// English dataset, strings and starting selection
#[derive(Debug, Default, Clone)]
pub struct EnglishPack {
    dataset_path: Option<PathBuf>,
}

impl EnglishPack {
    /// Pack backed by the embedded dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Pack reading its dataset from `path` when given
    pub fn with_dataset(path: Option<PathBuf>) -> Self {
        Self { dataset_path: path }
    }
}

impl LanguagePack for EnglishPack {
    fn language(&self) -> Language {
        Language::English
    }

    fn load_table(&self) -> Result<FrequencyTable, LoadError> {
        EnglishLoader::load_or_embedded(self.dataset_path.as_deref())
    }

    fn load_strings(&self) -> Result<StringTable, LoadError> {
        EnglishLoader::load_strings()
    }

    fn default_bar_words(&self) -> [&'static str; BAR_SLOTS] {
        ["the", "of", "and", "to", "a"]
    }

    fn default_line_word(&self) -> &'static str {
        "time"
    }
}

#[cfg(test)]
mod tests {
    use timesaurus_core::{Decade, LanguageProfile};

    use super::*;

    #[test]
    fn embedded_data_backs_the_defaults() {
        let pack = EnglishPack::new();
        let profile = LanguageProfile::from_pack(&pack).unwrap();
        assert_eq!(profile.language(), Language::English);
        assert_eq!(profile.remembered().bar, ["the", "of", "and", "to", "a"]);

        let table = profile.table();
        for word in table.words() {
            let series = table.series(word).unwrap();
            assert!(series.iter().all(|v| *v >= 0.0), "{word}");
        }
        assert!(table.frequency("the", Decade::D2010).unwrap() > 0.0);
    }

    #[test]
    fn strings_cover_dashboard_keys() {
        let strings = EnglishPack::new().load_strings().unwrap();
        for key in ["dashboardDesc", "barchartTitle", "barchartXAxis", "barchartYAxis", "decade"] {
            assert_ne!(strings.translate(key), key);
        }
    }

    #[test]
    fn unreadable_override_falls_back_to_embedded() {
        let pack = EnglishPack::with_dataset(Some(PathBuf::from("/nonexistent/en.json")));
        let table = pack.load_table().unwrap();
        assert!(table.contains("the"));
    }
}
