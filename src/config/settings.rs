use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::session::debounce;
use crate::site::{AccentColor, FontStyle, LayoutStyle, NormalizeDefaults, PresetKey, Theme};

const DEFAULT_OUTPUT_DIR: &str = "site";
const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

pub const KEYS: &[&str] = &[
    "output_dir",
    "separate_stylesheet",
    "preview_delay_ms",
    "poll_interval_ms",
    "theme",
    "accent_color",
    "font_style",
    "layout_style",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub separate_stylesheet: Option<bool>,
    #[serde(default)]
    pub preview_delay_ms: Option<u64>,
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub font_style: Option<String>,
    #[serde(default)]
    pub layout_style: Option<String>,
}

impl Settings {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn separate_stylesheet(&self) -> bool {
        self.separate_stylesheet.unwrap_or(false)
    }

    pub fn preview_delay(&self) -> Duration {
        self.preview_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(debounce::DEFAULT_DELAY)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        )
    }

    /// Fallback presets for the normalizer. A configured name that is not a
    /// known preset is a configuration error, unlike unknown profile input.
    pub fn normalize_defaults(&self) -> AppResult<NormalizeDefaults> {
        let builtin = NormalizeDefaults::default();

        Ok(NormalizeDefaults {
            theme: configured("theme", self.theme.as_deref(), builtin.theme)?,
            accent_color: configured(
                "accent_color",
                self.accent_color.as_deref(),
                builtin.accent_color,
            )?,
            font_style: configured("font_style", self.font_style.as_deref(), builtin.font_style)?,
            layout_style: configured(
                "layout_style",
                self.layout_style.as_deref(),
                builtin.layout_style,
            )?,
        })
    }

    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let value = value.trim();
        match key {
            "output_dir" => self.output_dir = Some(PathBuf::from(value)),
            "separate_stylesheet" => {
                let flag = value.parse().map_err(|_| {
                    AppError::InvalidInput(format!("{key} expects true or false, got `{value}`"))
                })?;
                self.separate_stylesheet = Some(flag);
            }
            "preview_delay_ms" => self.preview_delay_ms = Some(parse_millis(key, value)?),
            "poll_interval_ms" => self.poll_interval_ms = Some(parse_millis(key, value)?),
            "theme" => self.theme = Some(checked::<Theme>(key, value)?),
            "accent_color" => self.accent_color = Some(checked::<AccentColor>(key, value)?),
            "font_style" => self.font_style = Some(checked::<FontStyle>(key, value)?),
            "layout_style" => self.layout_style = Some(checked::<LayoutStyle>(key, value)?),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "unknown setting `{key}`. known settings: {}",
                    KEYS.join(", ")
                )));
            }
        }

        Ok(())
    }
}

fn configured<T: PresetKey>(key: &str, value: Option<&str>, fallback: T) -> AppResult<T> {
    match value {
        None => Ok(fallback),
        Some(raw) => T::from_key(raw).ok_or_else(|| unknown_preset::<T>(key, raw, AppError::Config)),
    }
}

fn checked<T: PresetKey>(key: &str, value: &str) -> AppResult<String> {
    T::from_key(value)
        .map(|preset| preset.key().to_string())
        .ok_or_else(|| unknown_preset::<T>(key, value, AppError::InvalidInput))
}

fn unknown_preset<T: PresetKey>(key: &str, value: &str, kind: fn(String) -> AppError) -> AppError {
    let known = T::ALL
        .iter()
        .map(|preset| preset.key())
        .collect::<Vec<_>>()
        .join(", ");
    kind(format!("unknown {key} `{value}`. expected one of: {known}"))
}

fn parse_millis(key: &str, value: &str) -> AppResult<u64> {
    value.parse().map_err(|_| {
        AppError::InvalidInput(format!("{key} expects a number of milliseconds, got `{value}`"))
    })
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
