//! Output helper functions for consistent styled messages.

use owo_colors::{OwoColorize, Stream};

/// Prints an informational message.
pub fn print_info(msg: &str) {
    println!("{}", msg.if_supports_color(Stream::Stdout, |text| text.cyan()));
}

/// Prints an error message prefixed with `Error:`.
pub fn print_error(msg: &str) {
    println!(
        "{} {msg}",
        "Error:".if_supports_color(Stream::Stdout, |text| text.red())
    );
}
