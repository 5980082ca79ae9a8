// SPDX-License-Identifier: MPL-2.0
//! Display-state enumeration for the image panel.

use crate::media::ImageData;

/// What the right-hand panel is currently showing.
///
/// The panel always reflects the most recent button press: a successful
/// selection replaces whatever was shown before, and a failed one replaces it
/// with the matching placeholder rather than leaving a stale image up.
#[derive(Debug, Clone)]
pub enum Display {
    /// The most recently selected image, resized to the target resolution.
    Picture(ImageData),
    /// The folder was readable but contained no matching files.
    NoImagesFound,
    /// The folder itself could not be read.
    FolderUnreadable,
    /// The chosen file could not be decoded.
    LoadFailed,
    /// No images folder was configured via CLI or settings.
    Unconfigured,
}
