use std::collections::HashMap;

use crate::dataset::FrequencyTable;
use crate::decade::Decade;
use crate::error::DashboardError;
use crate::language::Language;
use crate::lookup;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::selection::{BAR_SLOTS, CommitOutcome, LanguageProfile, Selection, Slot, SlotState};
use crate::types::{BarPoint, ChartLabels, DashboardView, LinePoint};

#[derive(Debug, Clone)]
struct InputSlot {
    pending: String,
    state: SlotState,
}

impl InputSlot {
    fn committed(word: &str) -> Self {
        Self {
            pending: word.to_string(),
            state: SlotState::Committed,
        }
    }
}

/// Session state behind the dashboard
///
/// Owns one [`LanguageProfile`] per language. Committed words are always
/// read from the active profile, so they cannot drift from what toggling
/// back to a language restores.
pub struct Dashboard {
    profiles: HashMap<Language, LanguageProfile>,
    active: Language,
    decade: Decade,
    bar_inputs: [InputSlot; BAR_SLOTS],
    line_input: InputSlot,
    suggestions: Vec<String>,
    preprocessor: DefaultPreprocessor,
}

impl Dashboard {
    /// Requires a profile for every [`Language`]
    pub fn new(
        profiles: impl IntoIterator<Item = LanguageProfile>,
        active: Language,
        decade: Decade,
    ) -> Result<Self, DashboardError> {
        let profiles: HashMap<Language, LanguageProfile> = profiles
            .into_iter()
            .map(|profile| (profile.language(), profile))
            .collect();

        for language in [Language::English, Language::French] {
            if !profiles.contains_key(&language) {
                return Err(DashboardError::MissingLanguage(language));
            }
        }

        let remembered = profiles[&active].remembered();
        let bar_inputs = std::array::from_fn(|i| InputSlot::committed(&remembered.bar[i]));
        let line_input = InputSlot::committed(&remembered.line);

        Ok(Self {
            profiles,
            active,
            decade,
            bar_inputs,
            line_input,
            suggestions: Vec::new(),
            preprocessor: DefaultPreprocessor,
        })
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profiles[&self.active]
    }

    fn input(&self, slot: Slot) -> &InputSlot {
        match slot {
            Slot::Bar(bar) => &self.bar_inputs[bar.index()],
            Slot::Line => &self.line_input,
        }
    }

    fn input_mut(&mut self, slot: Slot) -> &mut InputSlot {
        match slot {
            Slot::Bar(bar) => &mut self.bar_inputs[bar.index()],
            Slot::Line => &mut self.line_input,
        }
    }

    pub fn active_language(&self) -> Language {
        self.active
    }

    pub fn active_decade(&self) -> Decade {
        self.decade
    }

    pub fn table(&self) -> &FrequencyTable {
        self.profile().table()
    }

    /// Committed words of the active language
    pub fn committed_words(&self) -> &Selection {
        self.profile().remembered()
    }

    pub fn pending_input(&self, slot: Slot) -> &str {
        &self.input(slot).pending
    }

    pub fn slot_state(&self, slot: Slot) -> SlotState {
        self.input(slot).state
    }

    /// Suggestions computed by the last keystroke
    pub fn current_suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Suggestions for arbitrary input, without touching session state
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let input = self.preprocessor.process(input);
        lookup::suggest(self.table(), &input)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.profile().strings().translate(key)
    }

    pub fn bar_chart_data(&self) -> Vec<BarPoint> {
        lookup::points_for_words(self.table(), &self.committed_words().bar, self.decade)
    }

    pub fn line_chart_data(&self) -> Vec<LinePoint> {
        lookup::series_for_word(self.table(), &self.committed_words().line, &Decade::ALL)
    }

    pub fn on_decade_change(&mut self, decade: Decade) {
        tracing::debug!("Decade changed: {} -> {}", self.decade, decade);
        self.decade = decade;
    }

    /// Keystroke in `slot`: store the raw text and refresh suggestions
    pub fn on_word_input_change(&mut self, slot: Slot, text: &str) {
        let text = self.preprocessor.process(text);
        self.suggestions = self.suggestions(&text);
        tracing::trace!(
            "Slot {} editing '{}', {} suggestions",
            slot,
            text,
            self.suggestions.len()
        );

        let input = self.input_mut(slot);
        input.pending = text;
        input.state = SlotState::Editing;
    }

    /// Enter or blur on `slot`: apply the pending word if the active table
    /// knows it, otherwise restore the previous selection
    pub fn on_word_commit(&mut self, slot: Slot) -> CommitOutcome {
        let attempted = self.input(slot).pending.clone();

        let outcome = if lookup::exists(self.table(), &attempted) {
            let active = self.active;
            if let Some(profile) = self.profiles.get_mut(&active) {
                profile.remember(slot, attempted.clone());
            }
            CommitOutcome::Accepted(attempted)
        } else {
            CommitOutcome::Reverted {
                kept: self.committed_words().word(slot).to_string(),
                attempted,
            }
        };

        match &outcome {
            CommitOutcome::Accepted(word) => {
                tracing::debug!("Slot {} committed '{}'", slot, word);
            }
            CommitOutcome::Reverted { attempted, kept } => {
                tracing::debug!("Slot {} rejected '{}', keeping '{}'", slot, attempted, kept);
            }
        }

        *self.input_mut(slot) = InputSlot::committed(outcome.word());
        outcome
    }

    /// Switch to the other language and restore its remembered selection
    pub fn on_language_toggle(&mut self) -> Language {
        self.active = self.active.toggled();

        let remembered = self.profiles[&self.active].remembered();
        let bar_inputs = std::array::from_fn(|i| InputSlot::committed(&remembered.bar[i]));
        let line_input = InputSlot::committed(&remembered.line);
        self.bar_inputs = bar_inputs;
        self.line_input = line_input;
        self.suggestions.clear();

        tracing::info!("Language switched to {}", self.active);
        self.active
    }

    fn labels(&self, prefix: &str) -> ChartLabels {
        ChartLabels {
            title: self.translate(&format!("{prefix}Title")).to_string(),
            x_axis: self.translate(&format!("{prefix}XAxis")).to_string(),
            y_axis: self.translate(&format!("{prefix}YAxis")).to_string(),
        }
    }

    /// Snapshot for the presentation layer
    pub fn view(&self) -> DashboardView {
        DashboardView {
            language: self.active,
            toggle_label: self.active.toggle_label(),
            description: self.translate("dashboardDesc").to_string(),
            decade: self.decade,
            decade_caption: self.translate("decade").to_string(),
            bar_labels: self.labels("barchart"),
            line_labels: self.labels("linechart"),
            word_caption: self.translate("word").to_string(),
            line_word_caption: self.translate("lineWord").to_string(),
            help: self.translate("help").to_string(),
            bar: self.bar_chart_data(),
            line: self.line_chart_data(),
            line_word: self.committed_words().line.clone(),
            bar_inputs: self.bar_inputs.iter().map(|i| i.pending.clone()).collect(),
            line_input: self.line_input.pending.clone(),
            suggestions: self.suggestions.clone(),
        }
    }
}
