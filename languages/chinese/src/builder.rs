use std::collections::{HashMap, HashSet};

use pinyin_core::dictionary::ConstructionError;

use crate::dictionary::{PinyinDictionary, Reading};
use crate::syllable::{SyllableError, split_reading};

/// Collects entries and validates them into a [`PinyinDictionary`]
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: Vec<(String, Vec<String>)>,
    seen: HashSet<String>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Queue an entry. Inserting a key twice is an error, never an overwrite.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        readings: Vec<String>,
    ) -> Result<&mut Self, ConstructionError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConstructionError::EmptyKey);
        }
        if readings.is_empty() {
            return Err(ConstructionError::InvalidValue {
                key,
                reason: "reading list is empty".to_string(),
            });
        }
        if !self.seen.insert(key.clone()) {
            return Err(ConstructionError::DuplicateKey(key));
        }
        self.entries.push((key, readings));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse every reading and check the dictionary invariants
    pub fn build(self) -> Result<PinyinDictionary, ConstructionError> {
        let mut entries: HashMap<String, Vec<Reading>> = HashMap::with_capacity(self.entries.len());
        let mut words = Vec::new();

        for (key, sources) in self.entries {
            let expected = key.chars().count();
            let readings = sources
                .into_iter()
                .map(|source| parse_reading(&key, source, expected))
                .collect::<Result<Vec<_>, _>>()?;
            if expected > 1 {
                words.push(key.clone());
            }
            entries.insert(key, readings);
        }

        for word in &words {
            if let Some(character) = word.chars().find(|c| !entries.contains_key(c.to_string().as_str())) {
                return Err(ConstructionError::MissingCharacter {
                    key: word.clone(),
                    character,
                });
            }
        }

        tracing::debug!(
            "Built pinyin dictionary: {} entries, {} words",
            entries.len(),
            words.len()
        );
        Ok(PinyinDictionary::from_parts(entries))
    }
}

fn parse_reading(key: &str, source: String, expected: usize) -> Result<Reading, ConstructionError> {
    match split_reading(&source, Some(expected)) {
        Ok(syllables) => Ok(Reading::new(source, syllables)),
        Err(SyllableError::WrongCount { expected, found }) => Err(ConstructionError::SyllableCount {
            key: key.to_string(),
            reading: source,
            expected,
            found,
        }),
        Err(e) => Err(ConstructionError::InvalidReading {
            key: key.to_string(),
            reading: source,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::Tone;

    fn readings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build() {
        let mut builder = DictionaryBuilder::new();
        builder
            .insert("好", readings(&["hǎo", "hào"]))
            .unwrap()
            .insert("奇", readings(&["qí", "jī"]))
            .unwrap()
            .insert("心", readings(&["xīn"]))
            .unwrap()
            .insert("好奇心", readings(&["hàoqíxīn"]))
            .unwrap();
        assert_eq!(builder.len(), 4);

        let dict = builder.build().unwrap();
        assert_eq!(dict.max_key_length(), 3);
        assert_eq!(dict.primary("好").unwrap().source(), "hǎo");
    }

    #[test]
    fn test_duplicate_insert_is_error() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("谢", readings(&["xiè"])).unwrap();
        let err = builder.insert("谢", readings(&["xie"])).unwrap_err();
        assert_eq!(err, ConstructionError::DuplicateKey("谢".into()));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let mut builder = DictionaryBuilder::new();
        assert_eq!(
            builder.insert("", readings(&["a"])).unwrap_err(),
            ConstructionError::EmptyKey
        );
        assert!(matches!(
            builder.insert("你", Vec::new()).unwrap_err(),
            ConstructionError::InvalidValue { .. }
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_two_char_key_one_syllable_rejected() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("你", readings(&["nǐ"])).unwrap();
        builder.insert("好", readings(&["hǎo"])).unwrap();
        builder.insert("你好", readings(&["nǐ"])).unwrap();
        assert!(matches!(
            builder.build(),
            Err(ConstructionError::SyllableCount { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_too_many_syllables_rejected() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("你", readings(&["nǐhǎo"])).unwrap();
        assert!(matches!(
            builder.build(),
            Err(ConstructionError::SyllableCount { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_reading_rejected() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("你", readings(&["ni3"])).unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidReading { .. }));
        assert_eq!(err.key(), Some("你"));
    }

    #[test]
    fn test_syllabic_nasal_readings() {
        let mut builder = DictionaryBuilder::new();
        builder
            .insert("嗯", readings(&["ńg", "ń", "ňg", "ǹ"]))
            .unwrap()
            .insert("呣", readings(&["m", "ḿ"]))
            .unwrap()
            .insert("哼", readings(&["hēng", "hng"]))
            .unwrap();

        let dict = builder.build().unwrap();
        let en = dict.lookup("嗯").unwrap();
        assert_eq!(en.len(), 4);
        assert_eq!(en[0].syllables()[0].base(), "ng");
        assert_eq!(en[0].syllables()[0].tone(), Tone::Second);
        assert_eq!(en[3].syllables()[0].tone(), Tone::Fourth);
        assert_eq!(dict.primary("呣").unwrap().syllables()[0].tone(), Tone::Neutral);
        assert_eq!(dict.lookup("哼").unwrap()[1].syllables()[0].base(), "hng");
    }

    #[test]
    fn test_joined_place_names() {
        let mut builder = DictionaryBuilder::new();
        for (key, reading) in [("河", "hé"), ("湖", "hú"), ("济", "jǐ"), ("南", "nán")] {
            builder.insert(key, readings(&[reading])).unwrap();
        }
        builder.insert("河南", readings(&["hénán"])).unwrap();
        builder.insert("湖南", readings(&["húnán"])).unwrap();
        builder.insert("济南", readings(&["jǐnán"])).unwrap();

        let dict = builder.build().unwrap();
        for (key, first) in [("河南", "he"), ("湖南", "hu"), ("济南", "ji")] {
            let reading = dict.primary(key).unwrap();
            let bases: Vec<_> = reading.syllables().iter().map(|s| s.base()).collect();
            assert_eq!(bases, [first, "nan"]);
        }
    }

    #[test]
    fn test_missing_character_rejected() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("银", readings(&["yín"])).unwrap();
        builder.insert("银行", readings(&["yínháng"])).unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            ConstructionError::MissingCharacter {
                key: "银行".into(),
                character: '行',
            }
        );
    }
}
