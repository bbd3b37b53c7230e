use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary source file, the embedded dictionary when unset
    #[serde(default)]
    pub path: Option<String>,
    /// Sources merged into the base dictionary before it is built
    #[serde(default)]
    pub additional_paths: Vec<String>,
}
