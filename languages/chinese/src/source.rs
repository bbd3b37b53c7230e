use std::collections::{HashMap, HashSet};
use std::fmt;

use pinyin_core::dictionary::ConstructionError;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::builder::DictionaryBuilder;
use crate::dictionary::PinyinDictionary;

/// JSON object kept as written, duplicate keys included
struct RawSource(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawSource;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping text to lists of readings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawSource, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(key) = map.next_key::<String>()? {
                    let value = map.next_value::<Value>()?;
                    entries.push((key, value));
                }
                Ok(RawSource(entries))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

/// Validated, order-preserving dictionary source: text → candidate readings.
///
/// This is the curation form of a dictionary. Sources can be merged and
/// written back out, and are turned into a [`PinyinDictionary`] with
/// [`DictionarySource::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionarySource {
    entries: Vec<(String, Vec<String>)>,
}

impl DictionarySource {
    pub fn from_json(json: &str) -> Result<Self, ConstructionError> {
        let RawSource(raw) =
            serde_json::from_str(json).map_err(|e| ConstructionError::Malformed(e.to_string()))?;

        let mut seen = HashSet::with_capacity(raw.len());
        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            if key.is_empty() {
                return Err(ConstructionError::EmptyKey);
            }
            if !seen.insert(key.clone()) {
                return Err(ConstructionError::DuplicateKey(key));
            }
            let readings = readings_from_value(&key, value)?;
            entries.push((key, readings));
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, readings)| readings.as_slice())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r.as_slice()))
    }

    /// Add entries from `additions`, never overwriting.
    ///
    /// Keys already present with identical readings are left alone; keys
    /// present with different readings are reported as conflicts and skipped.
    pub fn merge(&mut self, additions: DictionarySource) -> MergeReport {
        let index: HashMap<String, usize> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();

        let mut report = MergeReport::default();
        for (key, readings) in additions.entries {
            match index.get(&key) {
                None => {
                    tracing::debug!("Adding {} -> {:?}", key, readings);
                    report.added.push(key.clone());
                    self.entries.push((key, readings));
                }
                Some(&i) if self.entries[i].1 == readings => {
                    tracing::warn!("Already present: {}", key);
                    report.unchanged.push(key);
                }
                Some(&i) => {
                    report.conflicts.push(ConstructionError::Conflict {
                        key,
                        existing: self.entries[i].1.clone(),
                        incoming: readings,
                    });
                }
            }
        }

        tracing::info!(
            "Merged dictionary source: {} added, {} unchanged, {} conflicts",
            report.added.len(),
            report.unchanged.len(),
            report.conflicts.len()
        );
        report
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn build(&self) -> Result<PinyinDictionary, ConstructionError> {
        let mut builder = DictionaryBuilder::with_capacity(self.entries.len());
        for (key, readings) in &self.entries {
            builder.insert(key.clone(), readings.clone())?;
        }
        builder.build()
    }
}

fn readings_from_value(key: &str, value: Value) -> Result<Vec<String>, ConstructionError> {
    let invalid = |reason: String| ConstructionError::InvalidValue {
        key: key.to_string(),
        reason,
    };

    let items = match value {
        Value::Array(items) => items,
        other => return Err(invalid(format!("expected a list of readings, got {other}"))),
    };
    if items.is_empty() {
        return Err(invalid("reading list is empty".to_string()));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(reading) => Ok(reading),
            other => Err(invalid(format!("reading #{} is not a string: {other}", i + 1))),
        })
        .collect()
}

impl Serialize for DictionarySource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, readings) in &self.entries {
            map.serialize_entry(key, readings)?;
        }
        map.end()
    }
}

/// Outcome of [`DictionarySource::merge`]
#[derive(Debug, Default)]
pub struct MergeReport {
    pub added: Vec<String>,
    pub unchanged: Vec<String>,
    pub conflicts: Vec<ConstructionError>,
}

impl MergeReport {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Fail with the first conflict, if any
    pub fn into_result(mut self) -> Result<Self, ConstructionError> {
        if self.conflicts.is_empty() {
            Ok(self)
        } else {
            Err(self.conflicts.swap_remove(0))
        }
    }
}
