// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The "Get random image" button was pressed.
    PickRandom,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional images directory. Takes precedence over the `images_dir`
    /// value in `settings.toml`.
    pub images_dir: Option<String>,
}
