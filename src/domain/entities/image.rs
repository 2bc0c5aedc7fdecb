//! Image file recognition for the icon directory.

use tokio::fs::File;

/// Recognized image extensions with their content types.
///
/// Extensions are matched case-insensitively against the end of a filename.
pub const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
];

/// Returns the content type for a filename with a recognized image extension.
///
/// Returns `None` for names without an extension, with an unknown extension,
/// or consisting of the extension alone (e.g. `.png`).
pub fn content_type_for(filename: &str) -> Option<&'static str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }

    IMAGE_TYPES
        .iter()
        .find(|(known, _)| ext.eq_ignore_ascii_case(known))
        .map(|(_, content_type)| *content_type)
}

/// Returns true if the filename carries a recognized image extension.
pub fn is_image_filename(filename: &str) -> bool {
    content_type_for(filename).is_some()
}

/// An opened image ready to be streamed to a client.
#[derive(Debug)]
pub struct ImageFile {
    pub content_type: &'static str,
    pub len: u64,
    pub file: File,
}
