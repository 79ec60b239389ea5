use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default input normalization: NFC, nothing else.
    ///
    /// Keys are matched exactly on commit, so whitespace and case are left
    /// as typed.
    fn process(&self, text: &str) -> String {
        text.nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
