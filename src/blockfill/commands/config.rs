use crate::commands::{CmdMessage, CmdResult};
use crate::config::GeneratorConfig;
use crate::error::{BlockfillError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = GeneratorConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GeneratorConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GeneratorConfig::load(config_dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(
                    e @ (BlockfillError::UnknownConfigKey(_)
                    | BlockfillError::InvalidConfigValue { .. }
                    | BlockfillError::UnknownPreset(_)
                    | BlockfillError::InvalidTargetLength(_)),
                ) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(e.to_string()));
                    return Ok(result);
                }
                Err(e) => return Err(e),
            }
            config.save(config_dir)?;

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn test_show_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(GeneratorConfig::default()));
    }

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("separator".into(), "newline".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(dir.path(), ConfigAction::ShowKey("separator".into())).unwrap();
        assert_eq!(shown.messages[0].content, "newline");
    }

    #[test]
    fn test_set_bad_value_reports_error_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("target-lines".into(), "lots".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("blockfill.json").exists());
    }

    #[test]
    fn test_show_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
