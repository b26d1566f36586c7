// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::core::sanitize::{character_slug, output_file_name};
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub analyze: AnalyzeOptions,
    pub serve: ServeOptions,
}

impl AppOptions {
    /// Parse a TOML config file. Missing sections/keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&text).map_err(|reason| Error::Config { path: path.to_path_buf(), reason })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// An explicit path must exist. Without one, `wiki_dialogue.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(p) => Self::load(p),
            None => {
                let p = Path::new(CONFIG_FILE);
                if p.is_file() { Self::load(p) } else { Ok(Self::default()) }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub character: String,
    pub out_dir: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(WIKI_BASE),
            character: s!(DEFAULT_CHARACTER),
            out_dir: PathBuf::from("."),
        }
    }
}

impl ScrapeOptions {
    /// `Piper Wright` → `{base}/Piper_Wright%27s_dialogue`
    pub fn page_url(&self, character: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url.trim_end_matches('/'),
            character_slug(character),
            PAGE_SUFFIX
        )
    }

    pub fn out_path(&self, character: &str) -> PathBuf {
        self.out_dir.join(output_file_name(character))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzeOptions {
    pub response_column: String,
    pub notes_column: String,
    pub top_n: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            response_column: s!(RESPONSE_COLUMN),
            notes_column: s!(NOTES_COLUMN),
            top_n: TOP_N,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub store_dir: PathBuf,
    pub default_file: String,
    pub open_browser: bool,
    pub browser_delay_ms: u64,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            host: s!(HOST),
            port: PORT,
            store_dir: PathBuf::from(STORE_DIR),
            default_file: s!(DEFAULT_FILE),
            open_browser: true,
            browser_delay_ms: BROWSER_DELAY_MS,
        }
    }
}

impl ServeOptions {
    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}
