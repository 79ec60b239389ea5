use std::path::PathBuf;

use timesaurus_core::{BAR_SLOTS, FrequencyTable, Language, LanguagePack, LoadError, StringTable};

use crate::loader::FrenchLoader;

/// French dataset, strings and starting selection
#[derive(Debug, Default, Clone)]
pub struct FrenchPack {
    dataset_path: Option<PathBuf>,
}

impl FrenchPack {
    /// Pack backed by the embedded dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Pack reading its dataset from `path` when given
    pub fn with_dataset(path: Option<PathBuf>) -> Self {
        Self { dataset_path: path }
    }
}

impl LanguagePack for FrenchPack {
    fn language(&self) -> Language {
        Language::French
    }

    fn load_table(&self) -> Result<FrequencyTable, LoadError> {
        FrenchLoader::load_or_embedded(self.dataset_path.as_deref())
    }

    fn load_strings(&self) -> Result<StringTable, LoadError> {
        FrenchLoader::load_strings()
    }

    fn default_bar_words(&self) -> [&'static str; BAR_SLOTS] {
        ["être", "je", "de", "ne", "la"]
    }

    fn default_line_word(&self) -> &'static str {
        "temps"
    }
}

#[cfg(test)]
mod tests {
    use timesaurus_core::LanguageProfile;
    use timesaurus_core::lookup::suggest;

    use super::*;

    #[test]
    fn embedded_data_backs_the_defaults() {
        let profile = LanguageProfile::from_pack(&FrenchPack::new()).unwrap();
        assert_eq!(profile.language(), Language::French);
        assert_eq!(profile.remembered().line, "temps");
    }

    #[test]
    fn accented_keys_are_suggested() {
        let table = FrenchPack::new().load_table().unwrap();
        assert_eq!(suggest(&table, "ÉT"), vec!["été", "étudiant", "état"]);
        assert_eq!(suggest(&table, "êt"), vec!["être"]);
    }

    #[test]
    fn strings_are_french() {
        let strings = FrenchPack::new().load_strings().unwrap();
        assert_eq!(strings.translate("decade"), "Décennie");
    }

    #[test]
    fn unreadable_override_falls_back_to_embedded() {
        let pack = FrenchPack::with_dataset(Some(PathBuf::from("/nonexistent/fr.json")));
        let table = pack.load_table().unwrap();
        assert!(table.contains("être"));
    }
}
