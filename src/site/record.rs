use serde::{Serialize, Serializer};

/// A closed set of style choices addressed by a stable key such as `"dark"`
/// or `"split-focus"`.
pub trait PresetKey: Copy + Eq + Sized + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.key().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl PresetKey for Theme {
    const ALL: &'static [Self] = &[Self::Light, Self::Dark];

    fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Inter,
    Crimson,
    Mono,
}

impl PresetKey for FontStyle {
    const ALL: &'static [Self] = &[Self::Inter, Self::Crimson, Self::Mono];

    fn key(self) -> &'static str {
        match self {
            Self::Inter => "inter",
            Self::Crimson => "crimson",
            Self::Mono => "mono",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    #[default]
    MinimalEditorial,
    SplitFocus,
    BoldStatement,
    CardModular,
    TimelineStory,
}

impl PresetKey for LayoutStyle {
    const ALL: &'static [Self] = &[
        Self::MinimalEditorial,
        Self::SplitFocus,
        Self::BoldStatement,
        Self::CardModular,
        Self::TimelineStory,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::MinimalEditorial => "minimal-editorial",
            Self::SplitFocus => "split-focus",
            Self::BoldStatement => "bold-statement",
            Self::CardModular => "card-modular",
            Self::TimelineStory => "timeline-story",
        }
    }
}

/// The accent palette. Keys are the hex values, matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccentColor {
    #[default]
    Blue,
    Violet,
    Pink,
    Red,
    Orange,
    Amber,
    Green,
    Teal,
}

impl AccentColor {
    pub fn hex(self) -> &'static str {
        self.key()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Green => "green",
            Self::Teal => "teal",
        }
    }
}

impl PresetKey for AccentColor {
    const ALL: &'static [Self] = &[
        Self::Blue,
        Self::Violet,
        Self::Pink,
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Green,
        Self::Teal,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Blue => "#2563eb",
            Self::Violet => "#7c3aed",
            Self::Pink => "#db2777",
            Self::Red => "#dc2626",
            Self::Orange => "#ea580c",
            Self::Amber => "#ca8a04",
            Self::Green => "#16a34a",
            Self::Teal => "#0d9488",
        }
    }
}

impl Serialize for AccentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// An image inlined as `data:<mime>;base64,<payload>`. Accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `None` for blank input so "no image" never renders an empty `src`.
    pub fn non_empty(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
    pub icon: Option<DataUri>,
}

impl LinkEntry {
    pub fn is_renderable(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub full_name: String,
    pub profession: String,
    pub education: String,
    pub bio: String,
    pub profile_photo: Option<DataUri>,
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub font_style: FontStyle,
    pub layout_style: LayoutStyle,
    pub custom_sections: Vec<LinkEntry>,
}

impl ProfileRecord {
    pub fn renderable_sections(&self) -> impl Iterator<Item = &LinkEntry> {
        self.custom_sections
            .iter()
            .filter(|entry| entry.is_renderable())
    }
}
