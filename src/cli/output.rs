//! Output formatting for CLI commands.

use serde::Serialize;

use crate::error::Result;

/// Print a value as one line of JSON, or pretty-printed when requested.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
