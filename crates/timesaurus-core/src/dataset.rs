use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use unicode_normalization::UnicodeNormalization;

use crate::decade::Decade;

/// Frequencies per million words for one word, indexed by [`Decade::index`]
pub type DecadeSeries = [f64; 10];

#[derive(Debug, Clone)]
struct FrequencyEntry {
    word: String,
    /// Lowercased form used for prefix matching
    lowered: String,
    series: DecadeSeries,
}

/// Immutable word -> decade -> frequency table
///
/// Keys keep the order they had in the source document, which is the order
/// suggestions are returned in.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{ word: { "1920": pmw, ... } }` document
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let raw: RawTable = serde_json::from_str(json_str)?;
        Self::from_raw(raw)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("Loading frequency table from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        tracing::info!("Loaded {} words from file", table.len());
        Ok(table)
    }

    fn from_raw(raw: RawTable) -> Result<Self, LoadError> {
        let mut table = Self::new();

        for (word, decades) in raw.0 {
            let mut series = [0.0; 10];
            for (key, value) in decades {
                let decade = Decade::from_key(&key).ok_or_else(|| {
                    LoadError::InvalidFormat(format!("unknown decade '{key}' for word '{word}'"))
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(LoadError::InvalidFormat(format!(
                        "frequency {value} for '{word}' in {decade} is not a non-negative number"
                    )));
                }
                series[decade.index()] = value;
            }
            table.insert(word, series);
        }

        Ok(table)
    }

    /// Keys are stored in NFC, the same form typed input is normalized to.
    /// Later duplicates replace the series but keep the first position.
    fn insert(&mut self, word: String, series: DecadeSeries) {
        let word: String = word.nfc().collect();
        if let Some(&idx) = self.index.get(&word) {
            self.entries[idx].series = series;
            return;
        }

        let idx = self.entries.len();
        self.index.insert(word.clone(), idx);
        self.entries.push(FrequencyEntry {
            lowered: word.to_lowercase(),
            word,
            series,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn series(&self, word: &str) -> Option<&DecadeSeries> {
        self.index.get(word).map(|&idx| &self.entries[idx].series)
    }

    /// Frequency of `word` in `decade`, `None` if the word is unknown
    pub fn frequency(&self, word: &str, decade: Decade) -> Option<f64> {
        self.series(word).map(|series| series[decade.index()])
    }

    /// Words in document order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// `(word, lowercased word)` pairs in document order
    pub(crate) fn words_lowered(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.word.as_str(), e.lowered.as_str()))
    }
}

/// Top-level document read as an ordered list of entries
struct RawTable(Vec<(String, HashMap<String, f64>)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawTableVisitor;

        impl<'de> Visitor<'de> for RawTableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of words to decade frequencies")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((word, decades)) = map.next_entry()? {
                    entries.push((word, decades));
                }
                Ok(RawTable(entries))
            }
        }

        deserializer.deserialize_map(RawTableVisitor)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
