// SPDX-License-Identifier: MPL-2.0
use dotshow::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        delay_ms: args.opt_value_from_str("--delay-ms").unwrap_or(None),
        deck_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
