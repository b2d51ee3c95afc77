pub mod debounce;

use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};
use crate::export::{self, ExportOptions, ExportReport};
use crate::render::{self, PresetTable, RenderedSite};
use crate::site::{DataUri, NormalizeDefaults, ProfileRecord, RawLink, RawProfile, samples};

pub use debounce::Debouncer;

/// Everything a page-building session holds between renders: the draft
/// fields, uploaded images, and the last generated site.
#[derive(Debug, Clone, Default)]
pub struct SiteSession {
    presets: PresetTable,
    defaults: NormalizeDefaults,
    draft: RawProfile,
    photo: Option<DataUri>,
    icons: BTreeMap<usize, DataUri>,
    generated: Option<RenderedSite>,
}

impl SiteSession {
    pub fn new(presets: PresetTable, defaults: NormalizeDefaults) -> Self {
        Self {
            presets,
            defaults,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &RawProfile {
        &self.draft
    }

    /// Replaces the draft. Icons belong to the old sections and are dropped;
    /// an uploaded photo is kept.
    pub fn load_draft(&mut self, draft: RawProfile) {
        self.draft = draft;
        self.icons.clear();
    }

    pub fn load_sample(&mut self, id: &str) -> AppResult<()> {
        let sample = samples::find(id).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "unknown sample `{id}`. run `mypage samples` to list them"
            ))
        })?;

        tracing::debug!(sample = sample.id, "loading sample");
        self.load_draft(sample.profile());
        Ok(())
    }

    pub fn set_photo(&mut self, photo: Option<DataUri>) {
        self.photo = photo;
    }

    /// Attaches an icon to the section at `index` (zero-based). Last write wins.
    pub fn set_section_icon(&mut self, index: usize, icon: DataUri) -> AppResult<()> {
        let count = self.draft.custom_sections.len();
        if index >= count {
            return Err(AppError::InvalidInput(format!(
                "link section {} does not exist ({count} defined)",
                index + 1
            )));
        }

        self.icons.insert(index, icon);
        Ok(())
    }

    pub fn add_section(&mut self, link: RawLink) -> usize {
        self.draft.custom_sections.push(link);
        self.draft.custom_sections.len() - 1
    }

    pub fn remove_section(&mut self, index: usize) -> Option<RawLink> {
        if index >= self.draft.custom_sections.len() {
            return None;
        }

        let removed = self.draft.custom_sections.remove(index);
        self.icons = std::mem::take(&mut self.icons)
            .into_iter()
            .filter(|(slot, _)| *slot != index)
            .map(|(slot, icon)| if slot > index { (slot - 1, icon) } else { (slot, icon) })
            .collect();
        Some(removed)
    }

    pub fn record(&self) -> ProfileRecord {
        let mut raw = self.draft.clone();
        if let Some(photo) = &self.photo {
            raw.profile_photo = Some(photo.as_str().to_string());
        }
        for (index, icon) in &self.icons {
            if let Some(link) = raw.custom_sections.get_mut(*index) {
                link.icon = Some(icon.as_str().to_string());
            }
        }

        crate::site::normalize_with(&raw, &self.defaults)
    }

    /// Renders the current draft with its stylesheet inlined, without storing it.
    pub fn preview(&self) -> String {
        render::render(&self.record(), &self.presets).inlined()
    }

    pub fn generate(&mut self) -> &RenderedSite {
        let site = render::render(&self.record(), &self.presets);
        self.generated.insert(site)
    }

    pub fn generated(&self) -> Option<&RenderedSite> {
        self.generated.as_ref()
    }

    pub fn export(&self, options: &ExportOptions) -> AppResult<ExportReport> {
        let site = self.generated.as_ref().ok_or(AppError::NotGenerated)?;
        export::write_site(site, options)
    }
}
