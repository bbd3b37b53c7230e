pub mod builder;
pub mod dictionary;
pub mod inventory;
pub mod loader;
pub mod processor;
pub mod render;
pub mod segmenter;
pub mod source;
pub mod syllable;

#[cfg(test)]
mod tests;

pub use builder::DictionaryBuilder;
pub use dictionary::{PinyinDictionary, Reading};
pub use loader::DictionaryLoader;
pub use processor::{ChineseProcessor, Conversion};
pub use render::RenderOptions;
pub use source::{DictionarySource, MergeReport};
pub use syllable::{Syllable, SyllableError, Tone};

use pinyin_core::dictionary::ConstructionError;
use pinyin_core::types::ToneFormat;

/// Build a dictionary from its JSON source
pub fn build_store(source: &str) -> Result<PinyinDictionary, ConstructionError> {
    PinyinDictionary::from_json(source)
}

/// Convert `text` against `store` with default rendering options
pub fn convert<'t, 'd>(store: &'d PinyinDictionary, text: &'t str, format: ToneFormat) -> Conversion<'t, 'd> {
    Conversion::new(store, text, RenderOptions::default().with_format(format))
}
