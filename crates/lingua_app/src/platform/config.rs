use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lingua_core::{languages, Settings, MIN_MESSAGE_CHARS};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "lingua.ron";

/// User configuration read from `lingua.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub state_dir: PathBuf,
    pub log_destination: LogDestination,
    pub default_target_language: String,
    pub min_message_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("./.lingua_state"),
            log_destination: LogDestination::default(),
            default_target_language: languages::DEFAULT_TARGET_LANGUAGE.to_string(),
            min_message_chars: MIN_MESSAGE_CHARS,
        }
    }
}

/// Config plus anything worth logging once the logger is up.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            default_target_language: self.default_target_language.clone(),
            min_message_chars: self.min_message_chars,
        }
    }

    fn validated(mut self, warnings: &mut Vec<String>) -> Self {
        if !languages::is_supported(&self.default_target_language) {
            warnings.push(format!(
                "default_target_language {:?} is not supported; using {:?}",
                self.default_target_language,
                languages::DEFAULT_TARGET_LANGUAGE
            ));
            self.default_target_language = languages::DEFAULT_TARGET_LANGUAGE.to_string();
        }
        if self.min_message_chars == 0 {
            warnings.push("min_message_chars must be at least 1; using 1".to_string());
            self.min_message_chars = 1;
        }
        self
    }
}

pub fn load(path: &Path) -> ConfigLoad {
    let mut warnings = Vec::new();
    let config = match fs::read_to_string(path) {
        Ok(text) => parse(&text, &mut warnings),
        Err(err) if err.kind() == io::ErrorKind::NotFound => AppConfig::default(),
        Err(err) => {
            warnings.push(format!("Failed to read config {:?}: {}", path, err));
            AppConfig::default()
        }
    };
    ConfigLoad { config, warnings }
}

fn parse(text: &str, warnings: &mut Vec<String>) -> AppConfig {
    match ron::from_str::<AppConfig>(text) {
        Ok(config) => config.validated(warnings),
        Err(err) => {
            warnings.push(format!("Failed to parse config: {}", err));
            AppConfig::default()
        }
    }
}
