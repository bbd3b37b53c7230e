use std::collections::HashMap;

use pinyin_core::dictionary::{ConstructionError, DictionaryMetadata, ReadingDictionary};

use crate::render::RenderOptions;
use crate::source::DictionarySource;
use crate::syllable::Syllable;

/// One candidate reading of a dictionary key, one syllable per character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    source: String,
    syllables: Vec<Syllable>,
}

impl Reading {
    pub(crate) fn new(source: String, syllables: Vec<Syllable>) -> Self {
        Self { source, syllables }
    }

    /// Reading as written in the dictionary source
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        options.render(&self.syllables)
    }
}

/// Immutable Chinese → Pinyin dictionary.
///
/// Holds single characters and multi-character words. Word entries override
/// the readings of their characters; the first reading of every entry is its
/// primary reading. Built once and shared read-only, typically in an `Arc`.
#[derive(Debug, Clone)]
pub struct PinyinDictionary {
    entries: HashMap<String, Vec<Reading>>,
    max_key_length: usize,
}

impl PinyinDictionary {
    pub(crate) fn from_parts(entries: HashMap<String, Vec<Reading>>) -> Self {
        let max_key_length = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            entries,
            max_key_length,
        }
    }

    /// Build from a JSON object of `text -> [reading, ...]`
    pub fn from_json(json: &str) -> Result<Self, ConstructionError> {
        DictionarySource::from_json(json)?.build()
    }

    pub fn lookup(&self, span: &str) -> Option<&[Reading]> {
        self.entries.get(span).map(Vec::as_slice)
    }

    /// First-listed reading of `span`
    pub fn primary(&self, span: &str) -> Option<&Reading> {
        self.entries.get(span).and_then(|readings| readings.first())
    }

    pub fn contains(&self, span: &str) -> bool {
        self.entries.contains_key(span)
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries whose key is longer than one character
    pub fn word_count(&self) -> usize {
        self.entries.keys().filter(|k| k.chars().nth(1).is_some()).count()
    }
}

impl ReadingDictionary for PinyinDictionary {
    type Reading = Reading;

    fn lookup(&self, span: &str) -> Option<&[Reading]> {
        PinyinDictionary::lookup(self, span)
    }

    fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "pinyin_map".to_string(),
            language: "zh".to_string(),
            entry_count: self.entries.len(),
            max_key_length: self.max_key_length,
        }
    }
}
