use std::borrow::Cow;

use crate::site::{LinkEntry, ProfileRecord};

use super::presets::PresetTable;

/// Placeholder the document links its stylesheet through. Replaced by an
/// inline `<style>` block when the stylesheet is embedded.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="style.css">"#;

const FOOTER_CREDIT: &str = r##"Built with <a href="#" target="_blank">mypage</a>"##;

pub fn render_html(record: &ProfileRecord, presets: &PresetTable) -> String {
    let font = presets.font(record.font_style);
    let name = escape(&record.full_name);
    let profession = escape(&record.profession);

    let mut out = String::with_capacity(4 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{name} - {profession}</title>\n"));
    out.push_str(&format!(
        "    <meta name=\"description\" content=\"{}\">\n",
        escape(&description(record))
    ));
    out.push_str(&format!(
        "    <link href=\"{}\" rel=\"stylesheet\">\n",
        escape(font.stylesheet_href)
    ));
    out.push_str(&format!("    {STYLESHEET_LINK}\n"));
    out.push_str("</head>\n<body>\n    <main class=\"container\">\n");

    push_hero(&mut out, record, &name, &profession);
    push_about(&mut out, &record.bio);
    push_links(&mut out, record);

    out.push_str("    </main>\n\n");
    out.push_str("    <footer class=\"site-footer\">\n");
    out.push_str(&format!("        <p>{FOOTER_CREDIT}</p>\n"));
    out.push_str("    </footer>\n</body>\n</html>\n");
    out
}

/// Escapes `& < > " '` so the value is safe in text and in quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

fn description(record: &ProfileRecord) -> String {
    if record.education.is_empty() {
        record.profession.clone()
    } else {
        format!("{} - {}", record.profession, record.education)
    }
}

fn push_hero(out: &mut String, record: &ProfileRecord, name: &str, profession: &str) {
    out.push_str("        <section class=\"hero-section\">\n");
    if let Some(photo) = &record.profile_photo {
        out.push_str(&format!(
            "            <img src=\"{}\" alt=\"{name}\" class=\"profile-photo\">\n",
            escape(photo.as_str())
        ));
    }
    out.push_str(&format!("            <h1 class=\"name\">{name}</h1>\n"));
    out.push_str(&format!(
        "            <p class=\"profession\">{profession}</p>\n"
    ));
    if !record.education.is_empty() {
        out.push_str(&format!(
            "            <p class=\"education\">{}</p>\n",
            escape(&record.education)
        ));
    }
    out.push_str("        </section>\n");
}

fn push_about(out: &mut String, bio: &str) {
    if bio.is_empty() {
        return;
    }

    let text = escape(bio).replace('\n', "<br>");
    out.push_str("\n        <section class=\"about-section\">\n");
    out.push_str("            <h2>About Me</h2>\n");
    out.push_str(&format!("            <p class=\"bio-text\">{text}</p>\n"));
    out.push_str("        </section>\n");
}

fn push_links(out: &mut String, record: &ProfileRecord) {
    let mut cards = record.renderable_sections().peekable();
    if cards.peek().is_none() {
        return;
    }

    out.push_str("\n        <section class=\"links-section\">\n");
    out.push_str("            <div class=\"links-grid\">\n");
    for entry in cards {
        push_link_card(out, entry);
    }
    out.push_str("            </div>\n");
    out.push_str("        </section>\n");
}

fn push_link_card(out: &mut String, entry: &LinkEntry) {
    let title = escape(&entry.title);

    out.push_str(&format!(
        "                <a href=\"{}\" class=\"link-card\" target=\"_blank\" rel=\"noopener noreferrer\">\n",
        escape(&entry.url)
    ));
    out.push_str("                    <span class=\"link-left\">\n");
    if let Some(icon) = &entry.icon {
        out.push_str(&format!(
            "                        <img src=\"{}\" alt=\"{title}\" class=\"link-icon\">\n",
            escape(icon.as_str())
        ));
    }
    out.push_str(&format!(
        "                        <span class=\"link-title\">{title}</span>\n"
    ));
    out.push_str("                    </span>\n");
    out.push_str("                    <span class=\"link-arrow\">→</span>\n");
    out.push_str("                </a>\n");
}
