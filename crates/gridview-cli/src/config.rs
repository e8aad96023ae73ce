use anyhow::{Context, Result, bail};
use gridview_types::ListConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display overrides from `config.toml` in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub card_page_size: Option<usize>,
    pub mobile_breakpoint: Option<u32>,
    pub wide_breakpoint: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load from a path; a missing file is the default configuration
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Overlay the file's display settings onto an entity configuration
    pub fn apply_to(&self, list_config: &mut ListConfig) {
        if let Some(size) = self.display.card_page_size {
            list_config.card_page_size = size.max(1);
        }
        if let Some(mobile) = self.display.mobile_breakpoint {
            list_config.breakpoints.mobile = mobile;
        }
        if let Some(wide) = self.display.wide_breakpoint {
            list_config.breakpoints.wide = wide;
        }
    }
}

/// Resolve the data directory path based on priority:
/// 1. Explicit --data-dir flag (with tilde expansion)
/// 2. GRIDVIEW_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.gridview (fallback for systems without a data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("GRIDVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("gridview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".gridview"));
    }

    bail!("Could not determine data directory: no HOME directory or platform data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.display.card_page_size.is_none());
    }

    #[test]
    fn parses_display_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[display]\ncard_page_size = 6\nmobile_breakpoint = 600\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display.card_page_size, Some(6));
        assert_eq!(config.display.mobile_breakpoint, Some(600));
        assert_eq!(config.display.wide_breakpoint, None);
    }

    #[test]
    fn overlays_onto_list_config() {
        let mut list_config = ListConfig::new("requests");
        let config = Config {
            display: DisplayConfig {
                card_page_size: Some(0),
                mobile_breakpoint: None,
                wide_breakpoint: Some(1280),
            },
        };

        config.apply_to(&mut list_config);
        // Zero page size clamps to the minimum
        assert_eq!(list_config.card_page_size, 1);
        assert_eq!(list_config.breakpoints.mobile, 768);
        assert_eq!(list_config.breakpoints.wide, 1280);
    }

    #[test]
    fn explicit_path_wins() {
        let resolved = resolve_data_dir(Some("/tmp/gv-data")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/gv-data"));
    }
}
