use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "mypage",
    version,
    about = "Build a one-page personal website from a profile"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Settings file to use instead of the per-user one"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the site and write it to the output directory
    Render(RenderArgs),
    /// Print the page with its stylesheet inlined
    Preview(PreviewArgs),
    /// Rebuild the site whenever the input files change
    Watch(WatchArgs),
    /// List the built-in sample profiles
    Samples,
    /// List layouts, fonts, themes and accent colors
    Presets,
    Config(ConfigArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    #[arg(long, value_name = "FILE", help = "Profile JSON file")]
    pub input: Option<PathBuf>,
    #[arg(long, conflicts_with = "input", help = "Start from a built-in sample profile")]
    pub sample: Option<String>,
    #[arg(long, value_name = "FILE", help = "Profile photo to embed")]
    pub photo: Option<PathBuf>,
    #[arg(
        long = "icon",
        value_name = "N=FILE",
        value_parser = parse_icon_arg,
        action = ArgAction::Append,
        help = "Icon for link section N, counting from 1 (repeatable)"
    )]
    pub icons: Vec<IconArg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconArg {
    pub section: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    #[arg(long, value_name = "DIR", help = "Output directory")]
    pub out: Option<PathBuf>,
    #[arg(long, help = "Also write style.css next to index.html")]
    pub separate_css: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Path,
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(help = "Setting name")]
    pub key: String,
    #[arg(help = "New value")]
    pub value: String,
}

pub fn parse_icon_arg(raw: &str) -> Result<IconArg, String> {
    let (section, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected N=FILE, got `{raw}`"))?;

    let section: usize = section
        .trim()
        .parse()
        .map_err(|_| format!("section number must be a positive integer, got `{section}`"))?;
    if section == 0 {
        return Err("section numbers start at 1".to_string());
    }

    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing file for section {section}"));
    }

    Ok(IconArg {
        section,
        path: PathBuf::from(path),
    })
}
