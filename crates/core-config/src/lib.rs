//! Configuration loading and parsing.
//!
//! Parses `az.toml` (or an override path provided by the binary). Every
//! field is optional; a missing file or a parse failure yields defaults so
//! the editor always starts. Out-of-range values are clamped by
//! `Config::clamped` and the adjustment is logged under the `config` target.
//! Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub use core_state::{DEFAULT_HISTORY_CAPACITY, DEFAULT_PAGE_ROWS, DEFAULT_TAB_SIZE};

pub const MAX_TAB_SIZE: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_size")]
    pub tab_size: usize,
    #[serde(default = "EditorConfig::default_page_rows")]
    pub page_rows: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: Self::default_tab_size(),
            page_rows: Self::default_page_rows(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_size() -> usize {
        DEFAULT_TAB_SIZE
    }
    const fn default_page_rows() -> usize {
        DEFAULT_PAGE_ROWS
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl HistoryConfig {
    const fn default_capacity() -> usize {
        DEFAULT_HISTORY_CAPACITY
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    #[serde(default = "BrowserConfig::default_show_hidden")]
    pub show_hidden: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            show_hidden: Self::default_show_hidden(),
        }
    }
}

impl BrowserConfig {
    const fn default_show_hidden() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data, clamped
    pub source: Option<PathBuf>,
}

impl Config {
    pub fn tab_size(&self) -> usize {
        self.file.editor.tab_size
    }
    pub fn page_rows(&self) -> usize {
        self.file.editor.page_rows
    }
    pub fn history_capacity(&self) -> usize {
        self.file.history.capacity
    }
    pub fn show_hidden(&self) -> bool {
        self.file.browser.show_hidden
    }

    /// Clamp parsed values into their supported ranges.
    pub fn clamped(mut self) -> Self {
        let editor = &mut self.file.editor;
        let raw_tab = editor.tab_size;
        editor.tab_size = raw_tab.clamp(1, MAX_TAB_SIZE);
        if editor.tab_size != raw_tab {
            info!(target: "config", raw = raw_tab, clamped = editor.tab_size, "tab_size_clamped");
        }
        if editor.page_rows == 0 {
            editor.page_rows = 1;
            info!(target: "config", raw = 0, clamped = 1, "page_rows_clamped");
        }
        let history = &mut self.file.history;
        if history.capacity == 0 {
            history.capacity = 1;
            info!(target: "config", raw = 0, clamped = 1, "history_capacity_clamped");
        }
        self
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    // Prefer a local working directory `az.toml` before the platform config dir.
    let local = PathBuf::from("az.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("az").join("az.toml");
    }
    PathBuf::from("az.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
                source: Some(path),
            }
            .clamped())
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}
