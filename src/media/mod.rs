// SPDX-License-Identifier: MPL-2.0
//! Image file recognition, loading, and display preparation.

pub mod image;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_for_display, load_image, ImageData};

/// Supported image extensions
pub mod extensions {
    /// Image file extensions recognized by the selector.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];
}

/// Checks if a file has a recognized image extension (case-insensitive).
///
/// Only the file name is inspected; the contents are not validated until the
/// file is actually loaded.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_supported_extensions() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(is_supported_image(Path::new("photo.gif")));
        assert!(is_supported_image(Path::new("photo.bmp")));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.Png")));
        assert!(is_supported_image(Path::new("photo.GiF")));
    }

    #[test]
    fn rejects_unsupported_formats() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("doc.pdf")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        // Formats the image crate could decode but the selector does not accept.
        assert!(!is_supported_image(Path::new("vector.svg")));
        assert!(!is_supported_image(Path::new("photo.webp")));
        assert!(!is_supported_image(Path::new("photo.tiff")));
    }

    #[test]
    fn rejects_files_without_extension() {
        assert!(!is_supported_image(Path::new("jpg")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
