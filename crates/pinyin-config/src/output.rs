use pinyin_core::types::{NeutralTone, ToneFormat, UmlautStyle};
use serde::{Deserialize, Serialize};

fn default_syllable_separator() -> String {
    " ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default)]
    pub tone_format: ToneFormat,
    #[serde(default)]
    pub neutral_tone: NeutralTone,
    #[serde(default)]
    pub umlaut: UmlautStyle,
    #[serde(default = "default_syllable_separator")]
    pub syllable_separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tone_format: ToneFormat::default(),
            neutral_tone: NeutralTone::default(),
            umlaut: UmlautStyle::default(),
            syllable_separator: default_syllable_separator(),
        }
    }
}
