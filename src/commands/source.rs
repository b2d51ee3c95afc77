use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::SourceArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::session::SiteSession;
use crate::site::RawProfile;
use crate::site::assets;

/// Builds a session from the input file or sample, then attaches any images.
pub fn build_session(ctx: &AppContext, source: &SourceArgs) -> AppResult<SiteSession> {
    let mut session = ctx.new_session()?;

    if let Some(path) = &source.input {
        session.load_draft(read_profile(path)?);
    } else if let Some(sample) = &source.sample {
        session.load_sample(sample)?;
    } else {
        tracing::info!("no --input or --sample given; rendering placeholders");
    }

    if let Some(path) = &source.photo {
        session.set_photo(Some(assets::load_data_uri(path)?));
    }

    for icon in &source.icons {
        let uri = assets::load_data_uri(&icon.path)?;
        session.set_section_icon(icon.section - 1, uri)?;
    }

    Ok(session)
}

pub fn read_profile(path: &Path) -> AppResult<RawProfile> {
    let raw = fs::read_to_string(path).map_err(|err| {
        AppError::InvalidInput(format!("unable to read {}: {err}", path.display()))
    })?;
    parse_profile(&raw)
}

fn parse_profile(raw: &str) -> AppResult<RawProfile> {
    if raw.trim().is_empty() {
        return Ok(RawProfile::default());
    }

    Ok(serde_json::from_str(raw)?)
}

/// Every file a build reads, in a stable order.
pub fn watched_paths(source: &SourceArgs) -> Vec<PathBuf> {
    source
        .input
        .iter()
        .chain(source.photo.iter())
        .chain(source.icons.iter().map(|icon| &icon.path))
        .cloned()
        .collect()
}
