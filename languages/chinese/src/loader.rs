use std::path::Path;

use pinyin_core::dictionary::LoadError;

use crate::dictionary::PinyinDictionary;
use crate::source::DictionarySource;

const EMBEDDED_SOURCE: &str = include_str!("../data/pinyin_map.json");

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<PinyinDictionary, LoadError> {
        tracing::info!("Loading embedded pinyin dictionary...");
        let dict = PinyinDictionary::from_json(EMBEDDED_SOURCE)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Read a dictionary source file without building it
    pub fn read_source(path: &Path) -> Result<DictionarySource, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        Ok(DictionarySource::from_json(&json)?)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<PinyinDictionary, LoadError> {
        tracing::info!("Loading pinyin dictionary from file: {}", path.display());
        let dict = Self::read_source(path)?.build()?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load a base source (the embedded one when `base` is `None`), merge the
    /// additional sources into it and build the result.
    ///
    /// Entries that disagree with what is already loaded fail the whole load.
    pub fn load_merged<P: AsRef<Path>>(
        base: Option<&Path>,
        additional: &[P],
    ) -> Result<PinyinDictionary, LoadError> {
        let mut source = match base {
            Some(path) => Self::read_source(path)?,
            None => DictionarySource::from_json(EMBEDDED_SOURCE)?,
        };

        for path in additional {
            let path = path.as_ref();
            tracing::info!("Merging additional dictionary from: {}", path.display());
            source.merge(Self::read_source(path)?).into_result()?;
        }

        let dict = source.build()?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }
}
