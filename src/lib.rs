// SPDX-License-Identifier: MPL-2.0
//! `iced_shuffle` is a minimal random image viewer built with the Iced GUI framework.
//!
//! Pressing the button picks one image uniformly at random from the configured
//! folder, resizes it to a fixed display resolution, and shows it in the
//! right-hand panel.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod selector;
