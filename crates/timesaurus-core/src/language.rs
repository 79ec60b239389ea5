use std::fmt;

use crate::dataset::{FrequencyTable, LoadError};
use crate::i18n::StringTable;
use crate::selection::BAR_SLOTS;

/// Languages the dashboard ships datasets for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            _ => None,
        }
    }

    /// The language the toggle switches to
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::English,
        }
    }

    /// Label of the toggle button, naming the language it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self.toggled() {
            Language::English => "EN",
            Language::French => "FR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Data bundle a language implementation provides to the dashboard
pub trait LanguagePack: Send + Sync {
    fn language(&self) -> Language;

    /// Load the word frequency table
    fn load_table(&self) -> Result<FrequencyTable, LoadError>;

    /// Load the display strings
    fn load_strings(&self) -> Result<StringTable, LoadError>;

    /// Bar chart words selected on first use
    fn default_bar_words(&self) -> [&'static str; BAR_SLOTS];

    /// Line chart word selected on first use
    fn default_line_word(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for lang in [Language::English, Language::French] {
            assert_eq!(lang.toggled().toggled(), lang);
            assert_ne!(lang.toggled(), lang);
        }
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Language::English.toggle_label(), "FR");
        assert_eq!(Language::French.toggle_label(), "EN");
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(Language::from_code("FR"), Some(Language::French));
        assert_eq!(Language::from_code(Language::English.code()), Some(Language::English));
        assert_eq!(Language::from_code("ja"), None);
    }
}
