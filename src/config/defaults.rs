// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for layout and display constants.
//!
//! This module serves as the single source of truth for the fixed dimensions
//! used across the application.

// ==========================================================================
// Display Resolution
// ==========================================================================

/// Width every displayed image is resized to before rendering.
pub const TARGET_WIDTH: u32 = 1000;

/// Height every displayed image is resized to before rendering.
pub const TARGET_HEIGHT: u32 = 500;

// ==========================================================================
// Window Layout
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1920;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 1080;

/// Fixed width of the left control column in logical pixels.
pub const CONTROL_PANEL_WIDTH: u32 = 400;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(TARGET_WIDTH > 0);
    assert!(TARGET_HEIGHT > 0);

    // The control column plus the displayed image must fit in the window.
    assert!(WINDOW_DEFAULT_WIDTH > CONTROL_PANEL_WIDTH + TARGET_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT > TARGET_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_resolution_matches_display_contract() {
        assert_eq!(TARGET_WIDTH, 1000);
        assert_eq!(TARGET_HEIGHT, 500);
    }

    #[test]
    fn window_fits_control_panel_and_image() {
        assert!(WINDOW_DEFAULT_WIDTH > CONTROL_PANEL_WIDTH + TARGET_WIDTH);
        assert!(WINDOW_DEFAULT_HEIGHT > TARGET_HEIGHT);
    }
}
