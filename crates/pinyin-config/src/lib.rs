use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::output::OutputConfig;

pub mod dictionary;
pub mod output;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(path) = lookup("PINYIN_DICTIONARY") {
            config.dictionary.path = Some(path);
        }

        if let Some(format) = lookup("PINYIN_TONE_FORMAT").and_then(|v| v.parse().ok()) {
            config.output.tone_format = format;
        }

        if let Some(neutral) = lookup("PINYIN_NEUTRAL_TONE").and_then(|v| v.parse().ok()) {
            config.output.neutral_tone = neutral;
        }

        if let Some(umlaut) = lookup("PINYIN_UMLAUT").and_then(|v| v.parse().ok()) {
            config.output.umlaut = umlaut;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pinyin_core::types::{NeutralTone, ToneFormat, UmlautStyle};

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.output.tone_format, ToneFormat::Diacritic);
        assert_eq!(config.output.syllable_separator, " ");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PINYIN_DICTIONARY", "/tmp/pinyin_map.json"),
            ("PINYIN_TONE_FORMAT", "numeric"),
            ("PINYIN_NEUTRAL_TONE", "5"),
            ("PINYIN_UMLAUT", "bogus"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dictionary.path.as_deref(), Some("/tmp/pinyin_map.json"));
        assert_eq!(config.output.tone_format, ToneFormat::Numeric);
        assert_eq!(config.output.neutral_tone, NeutralTone::Five);
        // unparseable values keep the default
        assert_eq!(config.output.umlaut, UmlautStyle::V);
    }

    #[test]
    fn test_partial_json() {
        let config: Config =
            serde_json::from_str(r#"{"output": {"tone_format": "numeric", "umlaut": "diaeresis"}}"#)
                .unwrap();
        assert_eq!(config.output.tone_format, ToneFormat::Numeric);
        assert_eq!(config.output.umlaut, UmlautStyle::Diaeresis);
        assert_eq!(config.output.syllable_separator, " ");
        assert!(config.dictionary.additional_paths.is_empty());
    }
}
