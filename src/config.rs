use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FlashError, Result};

/// Name of the project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "flashdeck.toml";

/// Effective settings, built from defaults plus partial toml layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub store: StoreConfig,
    pub ingest: IngestConfig,
}

impl Config {
    /// Load configuration for a process started in `project_dir`.
    ///
    /// An explicit path (or `FLASHDECK_CONFIG`) replaces the global and
    /// project files. Environment overrides always apply last.
    pub fn load(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("FLASHDECK_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_dir.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_overrides(env_string);

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("flashdeck/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FlashError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FlashError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.store {
            self.store.merge(patch);
        }
        if let Some(patch) = patch.ingest {
            self.ingest.merge(patch);
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("FLASHDECK_DB") {
            self.store.path = PathBuf::from(path);
        }
        if let Some(values) = lookup("FLASHDECK_EXCLUDED_DIRS").map(|v| split_list(&v)) {
            self.ingest.excluded_dirs = dedup(values);
        }
        if let Some(values) = lookup("FLASHDECK_EXTENSIONS").map(|v| split_list(&v)) {
            self.ingest.extensions = dedup(values);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    fn merge(&mut self, patch: StorePatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("flashcards.db")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Directory names under the resources root that are never certifications.
    pub excluded_dirs: Vec<String>,
    /// File extensions (without the dot) treated as category files. `tsv`
    /// and `tab` files are read tab-separated, everything else comma-separated.
    pub extensions: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: vec!["corrections".to_string()],
            extensions: vec!["csv".to_string()],
        }
    }
}

impl IngestConfig {
    fn merge(&mut self, patch: IngestPatch) {
        if let Some(values) = patch.excluded_dirs {
            self.excluded_dirs = values;
        }
        if let Some(values) = patch.extensions {
            self.extensions = values;
        }
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == dir_name)
    }

    pub fn is_recognized(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub store: Option<StorePatch>,
    pub ingest: Option<IngestPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StorePatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct IngestPatch {
    pub excluded_dirs: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
