use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::AppResult;

use super::record::DataUri;

/// Reads an image file into a data URI. The MIME type comes from the file extension.
pub fn load_data_uri(path: &Path) -> AppResult<DataUri> {
    let data = fs::read(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    if mime.type_() != mime_guess::mime::IMAGE {
        tracing::warn!(
            path = %path.display(),
            mime = mime.essence_str(),
            "embedding a file that does not look like an image"
        );
    }

    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded image");
    Ok(encode_data_uri(mime.essence_str(), &data))
}

pub fn encode_data_uri(mime_type: &str, data: &[u8]) -> DataUri {
    DataUri::new(format!("data:{mime_type};base64,{}", STANDARD.encode(data)))
}
