use std::fmt;

use crate::dataset::FrequencyTable;
use crate::error::{DashboardError, SlotError};
use crate::i18n::StringTable;
use crate::language::{Language, LanguagePack};

/// Number of words compared in the bar chart
pub const BAR_SLOTS: usize = 5;

/// A bar chart input, stored 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarSlot(usize);

impl BarSlot {
    /// From a 1-based slot number as shown to the user
    pub fn from_number(number: usize) -> Result<Self, SlotError> {
        if (1..=BAR_SLOTS).contains(&number) {
            Ok(Self(number - 1))
        } else {
            Err(SlotError::OutOfRange(number))
        }
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn number(&self) -> usize {
        self.0 + 1
    }

    pub fn all() -> impl Iterator<Item = BarSlot> {
        (0..BAR_SLOTS).map(BarSlot)
    }
}

/// A word input: one of the bar chart inputs or the line chart input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Bar(BarSlot),
    Line,
}

impl Slot {
    pub fn bar(number: usize) -> Result<Self, SlotError> {
        BarSlot::from_number(number).map(Slot::Bar)
    }

    /// Parse `1`-`5` or `line`
    pub fn parse(s: &str) -> Result<Self, SlotError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("line") {
            return Ok(Slot::Line);
        }
        match s.parse::<usize>() {
            Ok(number) => Slot::bar(number),
            Err(_) => Err(SlotError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Bar(bar) => write!(f, "{}", bar.number()),
            Slot::Line => f.write_str("line"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Pending text equals a validated selection
    Committed,
    /// User is typing; pending text may not be a known word
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Accepted(String),
    /// Unknown word; the previous selection was restored
    Reverted { attempted: String, kept: String },
}

impl CommitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CommitOutcome::Accepted(_))
    }

    /// The word committed after the attempt
    pub fn word(&self) -> &str {
        match self {
            CommitOutcome::Accepted(word) => word,
            CommitOutcome::Reverted { kept, .. } => kept,
        }
    }
}

/// Words selected for both charts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub bar: [String; BAR_SLOTS],
    pub line: String,
}

impl Selection {
    pub fn new(bar: [&str; BAR_SLOTS], line: &str) -> Self {
        Self {
            bar: bar.map(str::to_string),
            line: line.to_string(),
        }
    }

    pub fn word(&self, slot: Slot) -> &str {
        match slot {
            Slot::Bar(bar) => &self.bar[bar.index()],
            Slot::Line => &self.line,
        }
    }

    fn set(&mut self, slot: Slot, word: String) {
        match slot {
            Slot::Bar(bar) => self.bar[bar.index()] = word,
            Slot::Line => self.line = word,
        }
    }

    fn words(&self) -> impl Iterator<Item = &str> {
        self.bar
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.line.as_str()))
    }
}

/// Per-language data plus the selection remembered for that language
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    table: FrequencyTable,
    strings: StringTable,
    remembered: Selection,
}

impl LanguageProfile {
    /// Fails if any initial word is not in `table`
    pub fn new(
        language: Language,
        table: FrequencyTable,
        strings: StringTable,
        initial: Selection,
    ) -> Result<Self, DashboardError> {
        if let Some(word) = initial.words().find(|w| !table.contains(w)) {
            return Err(DashboardError::UnknownDefaultWord {
                language,
                word: word.to_string(),
            });
        }

        Ok(Self {
            language,
            table,
            strings,
            remembered: initial,
        })
    }

    pub fn from_pack(pack: &dyn LanguagePack) -> Result<Self, DashboardError> {
        let language = pack.language();
        let table = pack
            .load_table()
            .map_err(|source| DashboardError::Load { language, source })?;
        let strings = pack
            .load_strings()
            .map_err(|source| DashboardError::Load { language, source })?;
        tracing::info!(
            "{} profile ready: {} words, {} strings",
            language,
            table.len(),
            strings.len()
        );

        let initial = Selection::new(pack.default_bar_words(), pack.default_line_word());
        Self::new(language, table, strings, initial)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn remembered(&self) -> &Selection {
        &self.remembered
    }

    /// Only called with words already checked against `table`
    pub(crate) fn remember(&mut self, slot: Slot, word: String) {
        debug_assert!(self.table.contains(&word));
        self.remembered.set(slot, word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slots() {
        assert_eq!(Slot::parse("line"), Ok(Slot::Line));
        assert_eq!(Slot::parse("LINE"), Ok(Slot::Line));
        assert_eq!(Slot::parse("1").unwrap().to_string(), "1");
        assert_eq!(Slot::parse("5").unwrap().to_string(), "5");
        assert_eq!(Slot::parse("0"), Err(SlotError::OutOfRange(0)));
        assert_eq!(Slot::parse("6"), Err(SlotError::OutOfRange(6)));
        assert_eq!(Slot::parse("bar"), Err(SlotError::Unknown("bar".to_string())));
    }

    #[test]
    fn bar_slots_cover_every_index_once() {
        let indices: Vec<usize> = BarSlot::all().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn profile_rejects_unknown_initial_words() {
        let table = FrequencyTable::from_json(r#"{"the": {"1920": 1}}"#).unwrap();
        let initial = Selection::new(["the", "the", "the", "the", "the"], "ghost");
        let err = LanguageProfile::new(Language::English, table, StringTable::new(), initial)
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnknownDefaultWord { ref word, .. } if word == "ghost"
        ));
    }
}
