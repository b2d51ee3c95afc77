//! Turns a [`ProfileRecord`] into a page: one HTML document and one stylesheet.
//!
//! Rendering is pure and total. Missing data degrades to a placeholder or is
//! omitted; it never fails.

pub mod css;
pub mod html;
pub mod presets;

use serde::Serialize;

use crate::site::ProfileRecord;

pub use css::render_css;
pub use html::{STYLESHEET_LINK, render_html};
pub use presets::{FontPreset, LayoutPreset, PresetTable, ThemePalette};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSite {
    pub html: String,
    pub css: String,
}

impl RenderedSite {
    /// The document with its stylesheet inlined, as used for preview and export.
    pub fn inlined(&self) -> String {
        embed_stylesheet(&self.html, &self.css)
    }
}

pub fn render(record: &ProfileRecord, presets: &PresetTable) -> RenderedSite {
    RenderedSite {
        html: render_html(record, presets),
        css: render_css(record, presets),
    }
}

/// Replaces the stylesheet link with an inline `<style>` block. Documents
/// without the link come back unchanged.
pub fn embed_stylesheet(html: &str, css: &str) -> String {
    html.replacen(STYLESHEET_LINK, &format!("<style>\n{css}</style>"), 1)
}
