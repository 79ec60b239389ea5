pub mod dataset;
pub mod decade;
pub mod error;
pub mod i18n;
pub mod language;
pub mod lookup;
pub mod preprocess;
pub mod selection;
pub mod session;
pub mod types;

pub use dataset::{FrequencyTable, LoadError};
pub use decade::Decade;
pub use error::{DashboardError, SlotError};
pub use i18n::StringTable;
pub use language::{Language, LanguagePack};
pub use selection::{BAR_SLOTS, BarSlot, CommitOutcome, LanguageProfile, Selection, Slot, SlotState};
pub use session::Dashboard;

#[cfg(test)]
mod tests;
