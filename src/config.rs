//! Configuration for the site layout and loader behaviour.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MEDIASHELF_ROOT, MEDIASHELF_BASE_URL)
//! 2. Config file (.mediashelf/config.yaml)
//! 3. Defaults (current directory as site root)
//!
//! Config file discovery:
//! - Searches current directory and parents for .mediashelf/config.yaml
//! - `paths.root` is relative to the directory holding `.mediashelf/`

pub mod paths;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const ENV_ROOT: &str = "MEDIASHELF_ROOT";
const ENV_BASE_URL: &str = "MEDIASHELF_BASE_URL";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub probe: Option<ProbeFileConfig>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Site root (relative to the config directory's parent)
    pub root: Option<String>,
    /// Document directory, relative to the site root
    pub documents: Option<String>,
    /// Metadata output directory, relative to the site root
    pub data: Option<String>,
    /// Stream config file, relative to the site root
    pub stream_config: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeFileConfig {
    pub prefix: Option<String>,
    pub extension: Option<String>,
    pub max_candidates: Option<usize>,
    pub timeout_ms: Option<u64>,
}

/// Naming convention and limits for document discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Filename prefix before the number (`pdf` in `pdf01.pdf`)
    pub prefix: String,
    /// Extension without the dot
    pub extension: String,
    /// Document directory relative to the site root
    pub directory: String,
    /// Highest candidate number probed at runtime
    pub max_candidates: usize,
    /// Per-candidate existence check timeout
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            prefix: "pdf".to_string(),
            extension: "pdf".to_string(),
            directory: paths::DOCUMENTS_DIR.to_string(),
            max_candidates: 20,
            timeout: Duration::from_millis(2_000),
        }
    }
}

impl ProbeSettings {
    /// Candidate filename for a 1-based number (`pdf07.pdf`)
    pub fn candidate(&self, number: usize) -> String {
        format!("{}{:02}.{}", self.prefix, number, self.extension)
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the site root
    pub root: PathBuf,
    /// Metadata directory relative to the root
    pub data_dir: String,
    /// Stream config file relative to the root
    pub stream_config: String,
    /// Remote base URL for the loader (local root is used when unset)
    pub base_url: Option<String>,
    /// Document naming and probing
    pub probe: ProbeSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Configuration rooted at `root` with every other value defaulted
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            data_dir: paths::DATA_DIR.to_string(),
            stream_config: paths::STREAM_CONFIG.to_string(),
            base_url: None,
            probe: ProbeSettings::default(),
            config_file: None,
        }
    }

    /// Absolute document directory
    pub fn documents_dir(&self) -> PathBuf {
        self.root.join(&self.probe.directory)
    }

    /// Absolute stream config path
    pub fn stream_config_path(&self) -> PathBuf {
        self.root.join(&self.stream_config)
    }

    /// Document metadata location relative to the root
    pub fn documents_metadata(&self) -> String {
        crate::domain::entry::join_relative(&self.data_dir, paths::DOCUMENTS_METADATA)
    }

    /// Stream metadata location relative to the root
    pub fn streams_metadata(&self) -> String {
        crate::domain::entry::join_relative(&self.data_dir, paths::STREAMS_METADATA)
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".mediashelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration starting the file search at `start`
fn load_config_at(start: &Path) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start);

    let mut resolved = ResolvedConfig::with_root(start);

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .mediashelf/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        resolved.root = match config.paths.root {
            Some(ref root) => resolve_path(base_dir, root),
            None => base_dir.to_path_buf(),
        };
        if let Some(documents) = config.paths.documents {
            resolved.probe.directory = documents;
        }
        if let Some(data) = config.paths.data {
            resolved.data_dir = data;
        }
        if let Some(stream_config) = config.paths.stream_config {
            resolved.stream_config = stream_config;
        }
        if let Some(probe) = config.probe {
            if let Some(prefix) = probe.prefix {
                resolved.probe.prefix = prefix;
            }
            if let Some(extension) = probe.extension {
                resolved.probe.extension = extension.trim_start_matches('.').to_string();
            }
            if let Some(max) = probe.max_candidates {
                resolved.probe.max_candidates = max;
            }
            if let Some(ms) = probe.timeout_ms {
                resolved.probe.timeout = Duration::from_millis(ms);
            }
        }
        resolved.base_url = config.base_url;
    }

    if let Ok(env_root) = std::env::var(ENV_ROOT) {
        resolved.root = PathBuf::from(env_root);
    }
    if let Ok(env_url) = std::env::var(ENV_BASE_URL) {
        resolved.base_url = Some(env_url);
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_at(&cwd)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
