// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! The selection runs synchronously inside `update()`: a button press scans,
//! chooses, decodes, and resizes before the next event is handled. Failures
//! are reported as placeholder display states and logged to stderr.

use super::{App, Display, Message};
use crate::media;
use iced::Task;

impl App {
    /// Handle application messages and update state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickRandom => {
                self.display = self.pick_random();
                Task::none()
            }
        }
    }

    /// Runs one full selection round: scan the folder, choose a file at
    /// random, decode it, and resize it to the display resolution.
    pub(super) fn pick_random(&self) -> Display {
        let Some(selector) = &self.selector else {
            eprintln!(
                "No images folder configured; pass one on the command line \
                 or set `images_dir` in settings.toml"
            );
            return Display::Unconfigured;
        };

        let path = match selector.pick() {
            Ok(Some(path)) => path,
            Ok(None) => {
                eprintln!(
                    "No image files found in {}",
                    selector.directory().display()
                );
                return Display::NoImagesFound;
            }
            Err(err) => {
                eprintln!(
                    "Failed to read image folder {}: {:?}",
                    selector.directory().display(),
                    err
                );
                return Display::FolderUnreadable;
            }
        };

        match media::load_for_display(&path) {
            Ok(data) => Display::Picture(data),
            Err(err) => {
                eprintln!("Error loading image {}: {:?}", path.display(), err);
                Display::LoadFailed
            }
        }
    }
}
