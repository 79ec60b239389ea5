
use crate::dataset::FrequencyTable;
use crate::i18n::StringTable;
use crate::language::Language;
use crate::selection::{LanguageProfile, Selection};
use crate::session::Dashboard;
use crate::decade::Decade;

const ENGLISH: &str = r#"{
    "the": {"1920": 61000, "1950": 58000, "2010": 50000},
    "of": {"1920": 35000, "2010": 28000},
    "and": {"1920": 27000, "2010": 26000},
    "to": {"1920": 24000, "2010": 25000},
    "a": {"1920": 21000, "2010": 22000},
    "That": {"1920": 11000, "2010": 12000},
    "time": {"1920": 900, "1980": 1100, "2010": 1200},
    "THOSE": {"1920": 800},
    "thus": {"1920": 300},
    "through": {"1920": 700},
    "there": {"1920": 2000},
    "then": {"1920": 1500}
}"#;

const FRENCH: &str = r#"{
    "être": {"1920": 9000, "2010": 8000},
    "je": {"1920": 12000, "2010": 15000},
    "de": {"1920": 40000, "2010": 38000},
    "ne": {"1920": 9500, "2010": 7000},
    "la": {"1920": 25000, "2010": 24000},
    "temps": {"1920": 700, "2010": 650}
}"#;

const ENGLISH_STRINGS: &str = r#"{
    "dashboardDesc": "Word frequencies per million words, by decade",
    "barchartTitle": "Compare words",
    "barchartXAxis": "Word",
    "barchartYAxis": "Frequency (pmw)",
    "decade": "Decade"
}"#;

const FRENCH_STRINGS: &str = r#"{
    "dashboardDesc": "Fréquence des mots par million, par décennie",
    "decade": "Décennie"
}"#;

pub(crate) fn english_profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::English,
        FrequencyTable::from_json(ENGLISH).unwrap(),
        StringTable::from_json(ENGLISH_STRINGS).unwrap(),
        Selection::new(["the", "of", "and", "to", "a"], "time"),
    )
    .unwrap()
}

pub(crate) fn french_profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::French,
        FrequencyTable::from_json(FRENCH).unwrap(),
        StringTable::from_json(FRENCH_STRINGS).unwrap(),
        Selection::new(["être", "je", "de", "ne", "la"], "temps"),
    )
    .unwrap()
}

pub(crate) fn dashboard() -> Dashboard {
    Dashboard::new(
        [english_profile(), french_profile()],
        Language::English,
        Decade::D2010,
    )
    .unwrap()
}

pub(crate) fn english_table() -> FrequencyTable {
    FrequencyTable::from_json(ENGLISH).unwrap()
}
