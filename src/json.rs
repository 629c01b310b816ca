//! JSON output in the layout the extension sources use: tab indentation,
//! keys in insertion order, trailing newline.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

/// Serializes `value` with tab indentation and a trailing newline.
pub fn to_tab_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;

    let mut output = String::from_utf8(buffer)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    output.push('\n');
    Ok(output)
}
