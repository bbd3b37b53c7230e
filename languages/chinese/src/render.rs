use pinyin_core::types::{NeutralTone, ToneFormat, UmlautStyle};

use crate::syllable::Syllable;

/// How readings are turned into output strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: ToneFormat,
    pub neutral_tone: NeutralTone,
    pub umlaut: UmlautStyle,
    /// Placed between the syllables of a multi-character segment
    pub syllable_separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: ToneFormat::default(),
            neutral_tone: NeutralTone::default(),
            umlaut: UmlautStyle::default(),
            syllable_separator: " ".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_format(mut self, format: ToneFormat) -> Self {
        self.format = format;
        self
    }

    pub fn render_syllable(&self, syllable: &Syllable) -> String {
        match self.format {
            ToneFormat::Diacritic => syllable.to_diacritic(),
            ToneFormat::Numeric => syllable.to_numeric(self.neutral_tone, self.umlaut),
        }
    }

    pub fn render(&self, syllables: &[Syllable]) -> String {
        syllables
            .iter()
            .map(|s| self.render_syllable(s))
            .collect::<Vec<_>>()
            .join(&self.syllable_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::split_reading;

    #[test]
    fn test_render_word() {
        let syllables = split_reading("méiguānxi", Some(3)).unwrap();
        let options = RenderOptions::default();
        assert_eq!(options.render(&syllables), "méi guān xi");

        let numeric = options.clone().with_format(ToneFormat::Numeric);
        assert_eq!(numeric.render(&syllables), "mei2 guan1 xi");
    }

    #[test]
    fn test_custom_separator() {
        let syllables = split_reading("yínháng", Some(2)).unwrap();
        let options = RenderOptions {
            syllable_separator: String::new(),
            ..RenderOptions::default()
        };
        assert_eq!(options.render(&syllables), "yínháng");
    }
}
