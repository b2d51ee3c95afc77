use std::path::PathBuf;

use crate::cli::TargetArgs;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::export::ExportOptions;
use crate::output::Output;
use crate::render::PresetTable;
use crate::session::SiteSession;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config: Option<PathBuf>, json: bool, verbose: u8) -> AppResult<Self> {
        let paths = AppPaths::resolve(config)?;
        let settings = config::load_settings(&paths)?;
        let output = Output::new(json);

        tracing::debug!(settings = %paths.settings_file().display(), "loaded settings");

        Ok(Self {
            verbose,
            paths,
            settings,
            output,
        })
    }

    /// A fresh session using the built-in presets and the configured fallbacks.
    pub fn new_session(&self) -> AppResult<SiteSession> {
        let defaults = self.settings.normalize_defaults()?;
        Ok(SiteSession::new(PresetTable::builtin(), defaults))
    }

    pub fn export_options(&self, target: &TargetArgs) -> ExportOptions {
        ExportOptions {
            out_dir: target
                .out
                .clone()
                .unwrap_or_else(|| self.settings.output_dir()),
            separate_stylesheet: target.separate_css || self.settings.separate_stylesheet(),
        }
    }
}
