// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the selector and the view.
//!
//! The `App` struct owns the configured selector and the single "currently
//! displayed" state, and translates button presses into a fresh selection.
//! Directory resolution policy (CLI argument over `settings.toml`) lives here
//! so user-facing startup behavior is easy to audit.

mod display;
mod message;
mod update;
mod view;

pub use display::Display;
pub use message::{Flags, Message};

use crate::config;
use crate::config::defaults::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::selector::ImageSelector;
use iced::{window, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state: the configured selector plus whatever the
/// display panel currently shows.
#[derive(Debug)]
pub struct App {
    selector: Option<ImageSelector>,
    display: Display,
}

/// Builds the window settings
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and performs the initial selection so
    /// the window opens with an image already shown, as a button press would.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let images_dir = flags.images_dir.map(PathBuf::from).or_else(|| {
            config::load()
                .unwrap_or_else(|err| {
                    eprintln!("Failed to load settings: {:?}", err);
                    config::Config::default()
                })
                .images_dir
        });

        let mut app = Self::with_directory(images_dir);
        app.display = app.pick_random();

        (app, Task::none())
    }

    /// Creates an application over an optional images directory without
    /// touching the global configuration.
    fn with_directory(images_dir: Option<PathBuf>) -> Self {
        Self {
            selector: images_dir.map(ImageSelector::new),
            display: Display::Unconfigured,
        }
    }

    fn title(&self) -> String {
        String::from("Random Image Viewer")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
