// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is split into a fixed-width control column on the left and an
//! expandable display panel on the right that shows either the current image
//! or a textual placeholder.

use super::{App, Display, Message};
use crate::config::defaults::{CONTROL_PANEL_WIDTH, TARGET_HEIGHT, TARGET_WIDTH};
use iced::widget::{button, container, Column, Container, Image, Row, Text};
use iced::{alignment, Background, Element, Length, Theme};

const TITLE_SIZE: f32 = 40.0;
const BUTTON_TEXT_SIZE: f32 = 16.0;
const PLACEHOLDER_TEXT_SIZE: f32 = 20.0;

const NO_IMAGES_TEXT: &str = "No images found in folder.";
const LOAD_FAILED_TEXT: &str = "Error loading image.";
const FOLDER_UNREADABLE_TEXT: &str = "Could not read image folder.";
const UNCONFIGURED_TEXT: &str =
    "No image folder configured. Pass a folder on the command line.";

impl App {
    /// Build the user interface.
    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Random Photo Selector").size(TITLE_SIZE);

        let pick_button = button(Text::new("Get Random Image").size(BUTTON_TEXT_SIZE))
            .padding(10)
            .on_press(Message::PickRandom);

        let controls = Column::new()
            .spacing(20)
            .padding(30)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(pick_button);

        let control_panel = Container::new(controls)
            .width(Length::Fixed(CONTROL_PANEL_WIDTH as f32))
            .height(Length::Fill)
            .style(control_panel_style);

        let content: Element<'_, Message> = match &self.display {
            Display::Picture(data) => Image::new(data.handle.clone())
                .width(Length::Fixed(TARGET_WIDTH as f32))
                .height(Length::Fixed(TARGET_HEIGHT as f32))
                .into(),
            Display::NoImagesFound => placeholder(NO_IMAGES_TEXT),
            Display::FolderUnreadable => placeholder(FOLDER_UNREADABLE_TEXT),
            Display::LoadFailed => placeholder(LOAD_FAILED_TEXT),
            Display::Unconfigured => placeholder(UNCONFIGURED_TEXT),
        };

        let display_panel = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Row::new()
            .push(control_panel)
            .push(display_panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn placeholder(text: &'static str) -> Element<'static, Message> {
    Text::new(text).size(PLACEHOLDER_TEXT_SIZE).into()
}

/// Slightly offset surface so the control column reads as a separate region.
fn control_panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}
