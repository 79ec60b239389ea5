use crate::decade::Decade;
use crate::language::Language;
use crate::selection::Slot;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowDashboard(Box<DashboardView>),
    ShowSuggestions(Vec<String>),
    /// Presentation-only side effect of a language toggle
    SetDocumentLanguage(Language),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    DecadeChange(Decade),
    WordInputChange { slot: Slot, text: String },
    WordCommit(Slot),
    LanguageToggle,
    Refresh,
    Close,
}

/// One bar of the bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub word: String,
    pub value: f64,
}

/// One point of the line chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub decade: Decade,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub language: Language,
    pub toggle_label: &'static str,
    pub description: String,
    pub decade: Decade,
    pub decade_caption: String,
    pub bar_labels: ChartLabels,
    pub line_labels: ChartLabels,
    pub word_caption: String,
    pub line_word_caption: String,
    pub help: String,
    pub bar: Vec<BarPoint>,
    pub line: Vec<LinePoint>,
    pub line_word: String,
    pub bar_inputs: Vec<String>,
    pub line_input: String,
    pub suggestions: Vec<String>,
}
