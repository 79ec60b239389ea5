use std::collections::HashMap;

use crate::dataset::LoadError;

/// Display strings for one language
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat `{ key: text }` document
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let strings: HashMap<String, String> = serde_json::from_str(json_str)?;
        Ok(Self { strings })
    }

    /// Text for `key`, or the key itself when it has no entry
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_key() {
        let strings = StringTable::from_json(r#"{"decade": "Décennie"}"#).unwrap();
        assert_eq!(strings.translate("decade"), "Décennie");
        assert_eq!(strings.translate("barchartTitle"), "barchartTitle");
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(StringTable::from_json(r#"{"decade": 3}"#).is_err());
    }
}
