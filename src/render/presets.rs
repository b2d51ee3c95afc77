use crate::site::{FontStyle, LayoutStyle, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPreset {
    pub style: FontStyle,
    pub family: &'static str,
    pub stylesheet_href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub theme: Theme,
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
}

/// One self-contained layout ruleset. Presets never share rules with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPreset {
    pub style: LayoutStyle,
    pub label: &'static str,
    pub css: &'static str,
}

const FONTS: &[FontPreset] = &[
    FontPreset {
        style: FontStyle::Inter,
        family: "'Inter', -apple-system, BlinkMacSystemFont, sans-serif",
        stylesheet_href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
    },
    FontPreset {
        style: FontStyle::Crimson,
        family: "'Crimson Pro', serif",
        stylesheet_href: "https://fonts.googleapis.com/css2?family=Crimson+Pro:wght@400;600;700&display=swap",
    },
    FontPreset {
        style: FontStyle::Mono,
        family: "'JetBrains Mono', monospace",
        stylesheet_href: "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;600;700&display=swap",
    },
];

const THEMES: &[ThemePalette] = &[
    ThemePalette {
        theme: Theme::Dark,
        background: "#0a0a0a",
        background_secondary: "#1a1a1a",
        text: "#ffffff",
        text_secondary: "#a0a0a0",
        border: "#2a2a2a",
    },
    ThemePalette {
        theme: Theme::Light,
        background: "#ffffff",
        background_secondary: "#f3f4f6",
        text: "#111827",
        text_secondary: "#6b7280",
        border: "#e5e7eb",
    },
];

const LAYOUTS: &[LayoutPreset] = &[
    LayoutPreset {
        style: LayoutStyle::MinimalEditorial,
        label: "Minimal Editorial",
        css: include_str!("layouts/minimal-editorial.css"),
    },
    LayoutPreset {
        style: LayoutStyle::SplitFocus,
        label: "Split Focus",
        css: include_str!("layouts/split-focus.css"),
    },
    LayoutPreset {
        style: LayoutStyle::BoldStatement,
        label: "Bold Statement",
        css: include_str!("layouts/bold-statement.css"),
    },
    LayoutPreset {
        style: LayoutStyle::CardModular,
        label: "Card Modular",
        css: include_str!("layouts/card-modular.css"),
    },
    LayoutPreset {
        style: LayoutStyle::TimelineStory,
        label: "Timeline Story",
        css: include_str!("layouts/timeline-story.css"),
    },
];

/// Lookup tables for fonts, themes and layouts.
///
/// Every lookup is total: a missing entry resolves to the table's default
/// entry, and a table without one resolves to the built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTable {
    pub fonts: &'static [FontPreset],
    pub themes: &'static [ThemePalette],
    pub layouts: &'static [LayoutPreset],
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetTable {
    pub const fn builtin() -> Self {
        Self {
            fonts: FONTS,
            themes: THEMES,
            layouts: LAYOUTS,
        }
    }

    pub fn font(&self, style: FontStyle) -> &'static FontPreset {
        resolve(self.fonts, FONTS, |preset| preset.style, style, FontStyle::default())
    }

    pub fn palette(&self, theme: Theme) -> &'static ThemePalette {
        resolve(self.themes, THEMES, |palette| palette.theme, theme, Theme::default())
    }

    pub fn layout(&self, style: LayoutStyle) -> &'static LayoutPreset {
        resolve(
            self.layouts,
            LAYOUTS,
            |preset| preset.style,
            style,
            LayoutStyle::default(),
        )
    }
}

fn resolve<T, K: PartialEq + Copy>(
    table: &'static [T],
    builtin: &'static [T],
    key_of: impl Fn(&T) -> K,
    wanted: K,
    fallback: K,
) -> &'static T {
    let find = |entries: &'static [T], key: K| entries.iter().find(|entry| key_of(*entry) == key);

    find(table, wanted)
        .or_else(|| find(table, fallback))
        .or_else(|| find(builtin, fallback))
        .unwrap_or(&builtin[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::PresetKey;

    #[test]
    fn builtin_table_covers_every_preset() {
        let table = PresetTable::builtin();
        for style in LayoutStyle::ALL {
            assert_eq!(table.layout(*style).style, *style);
        }
        for style in FontStyle::ALL {
            assert_eq!(table.font(*style).style, *style);
        }
        for theme in Theme::ALL {
            assert_eq!(table.palette(*theme).theme, *theme);
        }
    }

    #[test]
    fn missing_layout_falls_back_to_default_entry() {
        let table = PresetTable {
            layouts: &LAYOUTS[..2],
            ..PresetTable::builtin()
        };
        assert_eq!(
            table.layout(LayoutStyle::TimelineStory).style,
            LayoutStyle::MinimalEditorial
        );
    }

    #[test]
    fn empty_tables_fall_back_to_builtin() {
        let table = PresetTable {
            fonts: &[],
            themes: &[],
            layouts: &[],
        };
        assert_eq!(table.font(FontStyle::Mono).style, FontStyle::Inter);
        assert_eq!(table.palette(Theme::Light).theme, Theme::Dark);
        assert_eq!(
            table.layout(LayoutStyle::SplitFocus).style,
            LayoutStyle::MinimalEditorial
        );
    }
}
