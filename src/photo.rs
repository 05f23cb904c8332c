//! Photo acquisition for new records.
//!
//! Every source ends up as the string stored in a record's `image` field:
//! local files and camera captures become base64 data URIs, pasted links
//! are validated and kept as URLs.

use std::fs;
use std::path::Path;

use base64::Engine;
use url::Url;

use crate::error::ImageError;
use crate::host::Host;

/// Default upper bound for inlined photos.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Where the add form's photo comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource<'a> {
    File(&'a Path),
    Url(&'a str),
    Camera,
}

/// Photo for the add form. A failure is reported once through the host and
/// yields `None`, so the pair is added with the placeholder image.
pub fn acquire(source: PhotoSource<'_>, max_bytes: u64, host: &mut dyn Host) -> Option<String> {
    let result = match source {
        PhotoSource::File(path) => from_file(path, max_bytes),
        PhotoSource::Url(url) => from_url(url),
        PhotoSource::Camera => from_camera(host, max_bytes),
    };

    match result {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!(error = %e, "photo skipped");
            host.notify(&format!("photo skipped: {e}"));
            None
        }
    }
}

/// Read a photo from disk and inline it.
pub fn from_file(path: &Path, max_bytes: u64) -> Result<String, ImageError> {
    let read_error = |source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(read_error)?.len();
    if size > max_bytes {
        return Err(ImageError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path).map_err(read_error)?;
    encode(&bytes, &path.display().to_string())
}

/// Inline raw photo bytes, e.g. from a camera capture.
pub fn from_bytes(bytes: &[u8], max_bytes: u64) -> Result<String, ImageError> {
    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(ImageError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    encode(bytes, "captured photo")
}

/// Ask the host for a camera photo and inline it.
pub fn from_camera(host: &mut dyn Host, max_bytes: u64) -> Result<String, ImageError> {
    let bytes = host.capture_image().ok_or(ImageError::CameraUnavailable)?;
    from_bytes(&bytes, max_bytes)
}

/// Validate a pasted link. Accepts http(s) URLs and image data URIs.
pub fn from_url(input: &str) -> Result<String, ImageError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed)?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        "data" if url.path().starts_with("image/") => Ok(trimmed.to_string()),
        scheme => Err(ImageError::UnsupportedScheme(scheme.to_string())),
    }
}

fn encode(bytes: &[u8], source: &str) -> Result<String, ImageError> {
    let format =
        image::guess_format(bytes).map_err(|_| ImageError::NotAnImage(source.to_string()))?;

    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    tracing::debug!(source, bytes = bytes.len(), mime = format.to_mime_type(), "photo inlined");

    Ok(format!("data:{};base64,{payload}", format.to_mime_type()))
}
