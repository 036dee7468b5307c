//! NDJSON output for `--json` mode.
//!
//! Every line is one object with an `event` field; command results use
//! `"event": "data"` and carry the command name.

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Build a `data` event for `command` with `payload` merged in
pub fn data_event<T: Serialize>(command: &str, payload: &T) -> io::Result<serde_json::Value> {
    let payload =
        serde_json::to_value(payload).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut event = serde_json::json!({
        "event": "data",
        "command": command,
    });
    if let (Some(target), serde_json::Value::Object(fields)) = (event.as_object_mut(), payload) {
        for (key, value) in fields {
            target.entry(key).or_insert(value);
        }
    }
    Ok(event)
}
