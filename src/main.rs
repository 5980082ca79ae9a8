// SPDX-License-Identifier: MPL-2.0
use iced_shuffle::app::{self, Flags};

fn main() -> iced::Result {
    let args = pico_args::Arguments::from_env();

    let flags = Flags {
        images_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
