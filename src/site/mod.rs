pub mod assets;
pub mod normalize;
pub mod record;
pub mod samples;

pub use normalize::{NormalizeDefaults, RawLink, RawProfile, normalize, normalize_with};
pub use record::{
    AccentColor, DataUri, FontStyle, LayoutStyle, LinkEntry, PresetKey, ProfileRecord, Theme,
};
