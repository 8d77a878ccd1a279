use crate::commands::{CmdMessage, CmdResult, PantryPaths};
use crate::config::PantryConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PantryPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = PantryConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PantryConfig::load(dir)?;
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
            let mut config = PantryConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
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
    use crate::model::Category;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> PantryPaths {
        PantryPaths::new(dir.path().to_path_buf())
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("default-category".into(), "grain".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        let loaded = PantryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_category, Category::Grain);
    }

    #[test]
    fn unknown_key_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn invalid_value_does_not_write_config() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("default-category".into(), "candy".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(PantryConfig::default()));
    }
}
