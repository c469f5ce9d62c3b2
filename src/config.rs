//! # Config Module
//!
//! Resolves and parses the credentials file: plain `KEY=VALUE` lines with
//! `#` comments, read once per run.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".config/menubar-utils";
pub const CONFIG_FILE: &str = "claude-usage.env";

pub const ORG_ID_KEY: &str = "CLAUDE_ORG_ID";
pub const SESSION_KEY_KEY: &str = "CLAUDE_SESSION_KEY";

/// Where the credentials file lives. `dir` is what the setup menu items
/// create/open; `file` is what gets parsed and edited.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub dir: PathBuf,
    pub file: PathBuf,
}

/// Resolve the credentials file location. An explicit override wins;
/// otherwise the fixed path under the home directory is used. `None` only
/// when the home directory cannot be determined.
pub fn resolve_paths(override_path: Option<&Path>) -> Option<ConfigPaths> {
    if let Some(file) = override_path {
        let dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        return Some(ConfigPaths {
            dir,
            file: file.to_path_buf(),
        });
    }

    let base = directories::BaseDirs::new()?;
    let dir = base.home_dir().join(CONFIG_DIR);
    let file = dir.join(CONFIG_FILE);
    Some(ConfigPaths { dir, file })
}

/// Parse a `KEY=VALUE` file into a map.
///
/// Blank lines and lines whose first non-space character is `#` are
/// skipped, as are lines without a `=`. Keys and values are trimmed; the
/// last occurrence of a duplicate key wins.
pub fn load_env(path: &Path) -> Result<HashMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;

    let mut env = HashMap::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            env.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(env)
}

/// The two values required to query the usage endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub org_id: String,
    pub session_key: String,
}

impl Credentials {
    /// Pull the required keys out of a parsed env map. `None` when either
    /// key is missing or empty after trimming.
    pub fn from_env(env: &HashMap<String, String>) -> Option<Self> {
        let org_id = env.get(ORG_ID_KEY).map(|v| v.trim())?;
        let session_key = env.get(SESSION_KEY_KEY).map(|v| v.trim())?;
        if org_id.is_empty() || session_key.is_empty() {
            return None;
        }
        Some(Credentials {
            org_id: org_id.to_string(),
            session_key: session_key.to_string(),
        })
    }
}
