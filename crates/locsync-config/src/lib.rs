use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;

pub mod translator;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "translator.config.json";

fn default_languages() -> Vec<String> {
    ["en", "es", "fr", "ar", "lzh", "ru"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_language_source() -> PathBuf {
    PathBuf::from("./src/languages/pt.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./src/languages")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Target languages, processed in this order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Dictionary every target is filled from
    #[serde(default = "default_language_source")]
    pub language_source: PathBuf,
    /// Where `<language>.json` files are read and written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Language of the source dictionary. Detected per text when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// Keep going with the next language after one fails
    pub continue_on_error: bool,

    #[serde(flatten)]
    pub translator: TranslatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            language_source: default_language_source(),
            output_dir: default_output_dir(),
            source_language: None,
            continue_on_error: false,
            translator: TranslatorConfig::default(),
        }
    }
}

impl Config {
    /// Make relative paths relative to `base` (the project directory)
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.language_source.is_relative() {
            self.language_source = base.join(&self.language_source);
        }

        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
    }
}
