use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pinyin_config::Config;
use pinyin_lang_chinese::{DictionaryLoader, PinyinDictionary, RenderOptions};

/// Load a config file, replacing the environment-derived config entirely
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(Config::new()),
    }
}

pub fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        format: config.output.tone_format,
        neutral_tone: config.output.neutral_tone,
        umlaut: config.output.umlaut,
        syllable_separator: config.output.syllable_separator.clone(),
    }
}

/// Build the dictionary described by `config`, with `path` taking precedence
/// over the configured base file
pub fn load_dictionary(config: &Config, path: Option<&Path>) -> anyhow::Result<Arc<PinyinDictionary>> {
    let base: Option<PathBuf> = path
        .map(Path::to_path_buf)
        .or_else(|| config.dictionary.path.as_ref().map(PathBuf::from));

    let dict = match (&base, config.dictionary.additional_paths.is_empty()) {
        (None, true) => DictionaryLoader::load_embedded()?,
        (Some(base), true) => DictionaryLoader::load_from_file(base)?,
        (base, false) => {
            DictionaryLoader::load_merged(base.as_deref(), &config.dictionary.additional_paths)?
        }
    };

    Ok(Arc::new(dict))
}
