//! Configuration loading for seoscope

mod schema;

pub use schema::{
    CompetitorSettings, Config, HttpSettings, StopWordSettings, DEFAULT_TOP_K,
};

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".seoscoperc.json";

/// Load the effective config for `work_dir`.
///
/// An explicit `custom_path` must exist; otherwise the nearest
/// `.seoscoperc.json` in `work_dir` or a parent is used, and no file at all
/// means defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let Some(path) = locate_config(work_dir, custom_path)? else {
        log::debug!("no {} found, using defaults", CONFIG_FILENAME);
        return Ok(Config::default());
    };

    let mut chain = ExtendsChain::default();
    let config = chain.load(&path)?;
    log::debug!("loaded config: {}", chain);
    Ok(config)
}

fn locate_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(custom) = custom_path else {
        return Ok(find_config_in_parents(work_dir));
    };
    // An absolute custom path replaces work_dir entirely
    let path = work_dir.join(custom);
    anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());
    Ok(Some(path))
}

/// Config files visited while following `extends`, child first
#[derive(Debug, Default)]
struct ExtendsChain {
    files: Vec<PathBuf>,
}

impl ExtendsChain {
    fn load(&mut self, path: &Path) -> Result<Config> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if self.files.contains(&canonical) {
            anyhow::bail!(
                "Circular extends detected in config: {} (chain: {})",
                path.display(),
                self
            );
        }
        self.files.push(canonical);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in config: {}", path.display()))?;

        if let Some(extends) = config.extends.take() {
            let base = base_path(path, &extends);
            anyhow::ensure!(
                base.exists(),
                "Extended config not found: {} (referenced from {})",
                base.display(),
                path.display()
            );
            config.merge_from(self.load(&base)?);
        }

        Ok(config)
    }
}

impl fmt::Display for ExtendsChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files: Vec<String> = self.files.iter().map(|p| p.display().to_string()).collect();
        write!(f, "{}", files.join(" -> "))
    }
}

/// `extends` is relative to the file naming it; a missing extension means `.json`
fn base_path(config_path: &Path, extends: &str) -> PathBuf {
    let dir = config_path.parent().unwrap_or(Path::new("."));
    let path = dir.join(extends);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("json")
    }
}

/// Search for .seoscoperc.json in directory and its parents
pub fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}
