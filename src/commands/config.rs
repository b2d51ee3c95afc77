use std::path::Path;

use serde::Serialize;

use crate::cli::ConfigCommand;
use crate::config::{self, AppPaths};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct SettingsPath<'a> {
    config_dir: &'a Path,
    settings_file: &'a Path,
    exists: bool,
}

impl<'a> SettingsPath<'a> {
    fn of(paths: &'a AppPaths) -> Self {
        let settings_file = paths.settings_file();
        Self {
            config_dir: paths.config_dir(),
            settings_file,
            exists: settings_file.exists(),
        }
    }
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Path => {
            let view = SettingsPath::of(&ctx.paths);
            ctx.output
                .emit(&view.settings_file.display().to_string(), &view)
        }
        ConfigCommand::Show => {
            let settings = &ctx.settings;
            let lines = vec![
                format!("output_dir: {}", settings.output_dir().display()),
                format!("separate_stylesheet: {}", settings.separate_stylesheet()),
                format!("preview_delay_ms: {}", settings.preview_delay().as_millis()),
                format!("poll_interval_ms: {}", settings.poll_interval().as_millis()),
                format!("theme: {}", display(settings.theme.as_deref())),
                format!("accent_color: {}", display(settings.accent_color.as_deref())),
                format!("font_style: {}", display(settings.font_style.as_deref())),
                format!("layout_style: {}", display(settings.layout_style.as_deref())),
            ];
            ctx.output.emit_lines(&lines, settings)
        }
        ConfigCommand::Set(args) => {
            let mut settings = ctx.settings.clone();
            settings.set(&args.key, &args.value)?;
            config::save_settings(&ctx.paths, &settings)?;

            let text = format!(
                "{} updated in {}",
                args.key,
                ctx.paths.settings_file().display()
            );
            ctx.output.emit(&text, &settings)
        }
    }
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("(default)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_view_reports_directory_and_existence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("settings.json");
        let paths = AppPaths::with_settings_file(file.clone());

        let view = SettingsPath::of(&paths);
        assert_eq!(view.config_dir, dir.path());
        assert_eq!(view.settings_file, file.as_path());
        assert!(!view.exists);

        std::fs::write(&file, "{}").expect("write settings");
        assert!(SettingsPath::of(&paths).exists);

        let json = serde_json::to_value(SettingsPath::of(&paths)).expect("serialize view");
        assert_eq!(json["config_dir"], dir.path().display().to_string());
    }
}
