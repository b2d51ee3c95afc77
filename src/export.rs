use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::AppResult;
use crate::render::RenderedSite;

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub separate_stylesheet: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub index_path: PathBuf,
    pub stylesheet_path: Option<PathBuf>,
    pub digest: String,
    pub bytes: usize,
}

/// Writes `index.html` with the stylesheet inlined and, when asked, a
/// standalone `style.css` next to it.
pub fn write_site(site: &RenderedSite, options: &ExportOptions) -> AppResult<ExportReport> {
    fs::create_dir_all(&options.out_dir)?;

    let document = site.inlined();
    let index_path = options.out_dir.join(INDEX_FILE);
    write_file(&index_path, &document)?;
    let mut bytes = document.len();

    let stylesheet_path = if options.separate_stylesheet {
        let path = options.out_dir.join(STYLESHEET_FILE);
        write_file(&path, &site.css)?;
        bytes += site.css.len();
        Some(path)
    } else {
        None
    };

    Ok(ExportReport {
        index_path,
        stylesheet_path,
        digest: site_digest(site),
        bytes,
    })
}

/// SHA-256 over the document and stylesheet, hex encoded.
pub fn site_digest(site: &RenderedSite) -> String {
    let mut hasher = Sha256::new();
    hasher.update(site.html.as_bytes());
    hasher.update([0_u8]);
    hasher.update(site.css.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(html: &str, css: &str) -> RenderedSite {
        RenderedSite {
            html: html.to_string(),
            css: css.to_string(),
        }
    }

    #[test]
    fn digest_is_stable_and_content_sensitive() {
        let a = site_digest(&site("<p>a</p>", "p {}"));
        assert_eq!(a, site_digest(&site("<p>a</p>", "p {}")));
        assert_ne!(a, site_digest(&site("<p>a</p>p {}", "")));
        assert_eq!(a.len(), 64);
    }
}
