use crate::document::Separator;
use crate::error::{BlockfillError, Result};
use crate::preset::Preset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "blockfill.json";
pub const DEFAULT_TARGET_LINES: usize = 100;

/// Generator defaults, stored in `blockfill.json`.
///
/// These only fill gaps: anything a draft states explicitly wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Lines per block when neither the block nor the draft says otherwise.
    #[serde(default = "default_target_lines")]
    pub target_lines: usize,

    #[serde(default)]
    pub separator: Separator,

    /// Style applied to blocks that name no preset of their own.
    #[serde(default)]
    pub preset: Option<Preset>,
}

fn default_target_lines() -> usize {
    DEFAULT_TARGET_LINES
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_lines: DEFAULT_TARGET_LINES,
            separator: Separator::default(),
            preset: None,
        }
    }
}

impl GeneratorConfig {
    pub const KEYS: &'static [&'static str] = &["target-lines", "separator", "preset"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "target-lines" => Some(self.target_lines.to_string()),
            "separator" => Some(self.separator.to_string()),
            "preset" => Some(
                self.preset
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || BlockfillError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "target-lines" => {
                let lines: usize = value.parse().map_err(|_| invalid())?;
                if lines == 0 {
                    return Err(BlockfillError::InvalidTargetLength(lines));
                }
                self.target_lines = lines;
            }
            "separator" => {
                self.separator = value.parse().map_err(|_| invalid())?;
            }
            "preset" => {
                self.preset = match value {
                    "none" => None,
                    name => Some(name.parse()?),
                };
            }
            other => return Err(BlockfillError::UnknownConfigKey(other.to_string())),
        }
        Ok(())
    }
}
