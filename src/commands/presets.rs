use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::render::PresetTable;
use crate::site::{AccentColor, FontStyle, LayoutStyle, PresetKey, Theme};

#[derive(Debug, Serialize)]
struct PresetEntry {
    key: &'static str,
    detail: &'static str,
}

#[derive(Debug, Serialize)]
struct PresetListing {
    layouts: Vec<PresetEntry>,
    fonts: Vec<PresetEntry>,
    themes: Vec<PresetEntry>,
    accents: Vec<PresetEntry>,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let listing = listing(&PresetTable::builtin());

    let mut lines = Vec::new();
    push_group(&mut lines, "layouts", &listing.layouts);
    push_group(&mut lines, "fonts", &listing.fonts);
    push_group(&mut lines, "themes", &listing.themes);
    push_group(&mut lines, "accents", &listing.accents);

    ctx.output.emit_lines(&lines, &listing)
}

fn listing(table: &PresetTable) -> PresetListing {
    PresetListing {
        layouts: LayoutStyle::ALL
            .iter()
            .map(|style| PresetEntry {
                key: style.key(),
                detail: table.layout(*style).label,
            })
            .collect(),
        fonts: FontStyle::ALL
            .iter()
            .map(|style| PresetEntry {
                key: style.key(),
                detail: table.font(*style).family,
            })
            .collect(),
        themes: Theme::ALL
            .iter()
            .map(|theme| PresetEntry {
                key: theme.key(),
                detail: table.palette(*theme).background,
            })
            .collect(),
        accents: AccentColor::ALL
            .iter()
            .map(|accent| PresetEntry {
                key: accent.hex(),
                detail: accent.name(),
            })
            .collect(),
    }
}

fn push_group(lines: &mut Vec<String>, heading: &str, entries: &[PresetEntry]) {
    lines.push(format!("{heading}:"));
    for entry in entries {
        lines.push(format!("  {:<18} {}", entry.key, entry.detail));
    }
}
