use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "mypage";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    settings_file: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let config_dir = config_root.join(APP_DIR);
        let settings_file = config_dir.join(SETTINGS_FILE);

        Ok(Self {
            config_dir,
            settings_file,
        })
    }

    /// Uses an explicit settings file instead of the per-user one.
    pub fn with_settings_file(path: PathBuf) -> Self {
        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self {
            config_dir,
            settings_file: path,
        }
    }

    pub fn resolve(override_path: Option<PathBuf>) -> AppResult<Self> {
        match override_path {
            Some(path) => Ok(Self::with_settings_file(path)),
            None => Self::discover(),
        }
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
