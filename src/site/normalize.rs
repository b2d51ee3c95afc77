use serde::{Deserialize, Deserializer, Serialize};

use super::record::{
    AccentColor, DataUri, FontStyle, LayoutStyle, LinkEntry, PresetKey, ProfileRecord, Theme,
};

pub const DEFAULT_FULL_NAME: &str = "Your Name";
pub const DEFAULT_PROFESSION: &str = "Your Profession";

/// Profile fields as a form or JSON file delivers them: anything may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub font_style: Option<String>,
    #[serde(default)]
    pub layout_style: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_sections: Vec<RawLink>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawLink>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<RawLink>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "link")]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl RawLink {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            icon: None,
        }
    }
}

/// Fallbacks for the enumerated fields when input is missing or unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeDefaults {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub font_style: FontStyle,
    pub layout_style: LayoutStyle,
}

pub fn normalize(raw: &RawProfile) -> ProfileRecord {
    normalize_with(raw, &NormalizeDefaults::default())
}

pub fn normalize_with(raw: &RawProfile, defaults: &NormalizeDefaults) -> ProfileRecord {
    ProfileRecord {
        full_name: text_or(raw.full_name.as_deref(), DEFAULT_FULL_NAME),
        profession: text_or(raw.profession.as_deref(), DEFAULT_PROFESSION),
        education: text_or(raw.education.as_deref(), ""),
        bio: normalize_bio(raw.bio.as_deref()),
        profile_photo: raw.profile_photo.as_deref().and_then(DataUri::non_empty),
        theme: preset_or("theme", raw.theme.as_deref(), defaults.theme),
        accent_color: preset_or(
            "accentColor",
            raw.accent_color.as_deref(),
            defaults.accent_color,
        ),
        font_style: preset_or("fontStyle", raw.font_style.as_deref(), defaults.font_style),
        layout_style: preset_or(
            "layoutStyle",
            raw.layout_style.as_deref(),
            defaults.layout_style,
        ),
        custom_sections: raw.custom_sections.iter().map(normalize_link).collect(),
    }
}

fn normalize_link(raw: &RawLink) -> LinkEntry {
    LinkEntry {
        title: link_text(raw.title.as_deref()),
        url: link_text(raw.url.as_deref()),
        icon: raw.icon.as_deref().and_then(DataUri::non_empty),
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whitespace-only values are kept as typed so the entry still counts as filled in.
fn link_text(value: Option<&str>) -> String {
    let raw = value.unwrap_or_default();
    match raw.trim() {
        "" => raw.to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn normalize_bio(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn preset_or<T: PresetKey>(field: &str, value: Option<&str>, fallback: T) -> T {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return fallback;
    };

    T::from_key(raw).unwrap_or_else(|| {
        tracing::debug!(field, value = raw, fallback = fallback.key(), "unknown preset, using fallback");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_every_default() {
        let record = normalize(&RawProfile::default());

        assert_eq!(record.full_name, DEFAULT_FULL_NAME);
        assert_eq!(record.profession, DEFAULT_PROFESSION);
        assert_eq!(record.education, "");
        assert_eq!(record.bio, "");
        assert_eq!(record.profile_photo, None);
        assert_eq!(record.theme, Theme::Dark);
        assert_eq!(record.accent_color, AccentColor::Blue);
        assert_eq!(record.font_style, FontStyle::Inter);
        assert_eq!(record.layout_style, LayoutStyle::MinimalEditorial);
        assert!(record.custom_sections.is_empty());
    }

    #[test]
    fn blank_name_falls_back_to_placeholder() {
        let raw = RawProfile {
            full_name: Some("   ".to_string()),
            ..RawProfile::default()
        };
        assert_eq!(normalize(&raw).full_name, DEFAULT_FULL_NAME);
    }

    #[test]
    fn accent_outside_palette_uses_default() {
        let raw = RawProfile {
            accent_color: Some("#4b5563".to_string()),
            ..RawProfile::default()
        };
        assert_eq!(normalize(&raw).accent_color, AccentColor::Blue);
    }

    #[test]
    fn unknown_layout_uses_configured_fallback() {
        let raw = RawProfile {
            layout_style: Some("brutalist".to_string()),
            ..RawProfile::default()
        };
        let defaults = NormalizeDefaults {
            layout_style: LayoutStyle::CardModular,
            ..NormalizeDefaults::default()
        };
        assert_eq!(
            normalize_with(&raw, &defaults).layout_style,
            LayoutStyle::CardModular
        );
    }

    #[test]
    fn bio_keeps_newlines_and_unifies_line_endings() {
        let raw = RawProfile {
            bio: Some("first\r\nsecond\rthird".to_string()),
            ..RawProfile::default()
        };
        assert_eq!(normalize(&raw).bio, "first\nsecond\nthird");
    }

    #[test]
    fn whitespace_only_bio_is_kept() {
        let raw = RawProfile {
            bio: Some(" \r\n ".to_string()),
            ..RawProfile::default()
        };
        assert_eq!(normalize(&raw).bio, " \n ");
        assert_eq!(normalize(&RawProfile::default()).bio, "");
    }

    #[test]
    fn whitespace_only_link_fields_stay_renderable() {
        let raw = RawProfile {
            custom_sections: vec![
                RawLink::new(" ", "https://a"),
                RawLink::new("  Blog ", " https://b "),
                RawLink::new("C", ""),
            ],
            ..RawProfile::default()
        };
        let sections = normalize(&raw).custom_sections;

        assert_eq!(sections[0].title, " ");
        assert!(sections[0].is_renderable());
        assert_eq!(sections[1].title, "Blog");
        assert_eq!(sections[1].url, "https://b");
        assert!(!sections[2].is_renderable());
    }

    #[test]
    fn keeps_section_order_and_invalid_entries() {
        let raw = RawProfile {
            custom_sections: vec![
                RawLink::new("A", "https://a"),
                RawLink::new("", "https://b"),
                RawLink::new("C", "https://c"),
            ],
            ..RawProfile::default()
        };
        let titles: Vec<_> = normalize(&raw)
            .custom_sections
            .into_iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(titles, ["A", "", "C"]);
    }

    #[test]
    fn deserializes_form_field_names() {
        let raw: RawProfile = serde_json::from_str(
            r##"{"fullName":"Ann","accentColor":"#16a34a","customSections":[{"title":"Blog","link":"https://ann.dev"}]}"##,
        )
        .expect("raw profile should parse");

        assert_eq!(raw.full_name.as_deref(), Some("Ann"));
        assert_eq!(raw.custom_sections[0].url.as_deref(), Some("https://ann.dev"));
    }

    #[test]
    fn null_fields_count_as_missing() {
        let raw: RawProfile = serde_json::from_str(
            r#"{"fullName":"Ann","bio":null,"layoutStyle":null,"customSections":null}"#,
        )
        .expect("null fields should parse");

        assert!(raw.custom_sections.is_empty());
        let record = normalize(&raw);
        assert_eq!(record.full_name, "Ann");
        assert_eq!(record.bio, "");
        assert_eq!(record.layout_style, LayoutStyle::MinimalEditorial);
        assert!(record.custom_sections.is_empty());
    }
}
