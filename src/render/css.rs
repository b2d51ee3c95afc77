use crate::site::{PresetKey, ProfileRecord};

use super::presets::PresetTable;

const BASE_RULES: &str = r#"body {
    font-family: var(--font-body);
    background: var(--color-bg);
    color: var(--color-text);
    line-height: 1.6;
    min-height: 100vh;
}
img { display: block; max-width: 100%; }
a { text-decoration: none; color: inherit; }
h1, h2, h3, h4, h5, h6 { color: var(--color-accent); line-height: 1.2; }
p { color: var(--color-text-secondary); }
.site-footer {
    text-align: center;
    padding: 2rem;
    border-top: 1px solid var(--color-border);
    font-size: 0.875rem;
    color: var(--color-text-secondary);
    margin-top: auto;
}
"#;

pub fn render_css(record: &ProfileRecord, presets: &PresetTable) -> String {
    let palette = presets.palette(record.theme);
    let font = presets.font(record.font_style);
    let layout = presets.layout(record.layout_style);

    let mut out = String::with_capacity(BASE_RULES.len() + layout.css.len() + 512);
    out.push_str("* { margin: 0; padding: 0; box-sizing: border-box; }\n");
    out.push_str(":root {\n");
    push_property(&mut out, "--color-bg", palette.background);
    push_property(&mut out, "--color-bg-secondary", palette.background_secondary);
    push_property(&mut out, "--color-text", palette.text);
    push_property(&mut out, "--color-text-secondary", palette.text_secondary);
    push_property(&mut out, "--color-border", palette.border);
    push_property(&mut out, "--color-accent", record.accent_color.hex());
    push_property(&mut out, "--font-body", font.family);
    out.push_str("}\n");
    out.push_str(BASE_RULES);
    out.push_str(&format!("\n/* layout: {} */\n", layout.style.key()));
    out.push_str(layout.css);
    out
}

fn push_property(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("    {name}: {value};\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{RawProfile, normalize};

    fn render(raw: RawProfile) -> String {
        render_css(&normalize(&raw), &PresetTable::builtin())
    }

    #[test]
    fn dark_theme_is_the_default_palette() {
        let css = render(RawProfile::default());
        assert!(css.contains("--color-bg: #0a0a0a;"));
        assert!(css.contains("--color-accent: #2563eb;"));
        assert!(css.contains("/* layout: minimal-editorial */"));
    }

    #[test]
    fn light_theme_and_serif_font() {
        let css = render(RawProfile {
            theme: Some("light".to_string()),
            font_style: Some("crimson".to_string()),
            accent_color: Some("#7c3aed".to_string()),
            ..RawProfile::default()
        });
        assert!(css.contains("--color-bg: #ffffff;"));
        assert!(css.contains("--color-border: #e5e7eb;"));
        assert!(css.contains("--font-body: 'Crimson Pro', serif;"));
        assert!(css.contains("--color-accent: #7c3aed;"));
    }

    #[test]
    fn appends_selected_layout_block() {
        let css = render(RawProfile {
            layout_style: Some("bold-statement".to_string()),
            ..RawProfile::default()
        });
        assert!(css.contains("/* layout: bold-statement */"));
        assert!(css.ends_with(PresetTable::builtin().layout(crate::site::LayoutStyle::BoldStatement).css));
    }
}
