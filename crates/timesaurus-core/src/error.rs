use crate::dataset::LoadError;
use crate::language::Language;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to load {language} data: {source}")]
    Load {
        language: Language,
        #[source]
        source: LoadError,
    },

    #[error("default word '{word}' is missing from the {language} table")]
    UnknownDefaultWord { language: Language, word: String },

    #[error("no profile registered for language {0}")]
    MissingLanguage(Language),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("bar slot {0} is out of range, expected 1-5")]
    OutOfRange(usize),

    #[error("unknown slot '{0}', expected 1-5 or 'line'")]
    Unknown(String),
}
