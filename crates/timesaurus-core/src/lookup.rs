use crate::dataset::FrequencyTable;
use crate::decade::Decade;
use crate::types::{BarPoint, LinePoint};

/// Maximum number of autosuggestions offered for one input
pub const MAX_SUGGESTIONS: usize = 5;

/// First [`MAX_SUGGESTIONS`] words starting with `prefix`, ignoring case,
/// in the table's key order. An empty prefix suggests nothing.
pub fn suggest<'a>(table: &'a FrequencyTable, prefix: &str) -> Vec<&'a str> {
    if prefix.is_empty() {
        return vec![];
    }

    let prefix = prefix.to_lowercase();
    table
        .words_lowered()
        .filter(|(_, lowered)| lowered.starts_with(&prefix))
        .map(|(word, _)| word)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Exact, case-sensitive membership check
pub fn exists(table: &FrequencyTable, word: &str) -> bool {
    table.contains(word)
}

/// One point per decade, in the order given; unknown words yield zeros
pub fn series_for_word(table: &FrequencyTable, word: &str, decades: &[Decade]) -> Vec<LinePoint> {
    decades
        .iter()
        .map(|&decade| LinePoint {
            decade,
            value: table.frequency(word, decade).unwrap_or(0.0),
        })
        .collect()
}

/// One point per word, in the order given; unknown words yield zero
pub fn points_for_words<S: AsRef<str>>(
    table: &FrequencyTable,
    words: &[S],
    decade: Decade,
) -> Vec<BarPoint> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            BarPoint {
                word: word.to_string(),
                value: table.frequency(word, decade).unwrap_or(0.0),
            }
        })
        .collect()
}
