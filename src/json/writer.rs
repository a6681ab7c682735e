//! Writer für Befehlsfolgen im JSON-Format.

use anyhow::Result;

use crate::shared::PathCommand;

/// Schreibt Befehle als JSON-Liste (`{"MoveTo": {"lat": .., "lng": ..}}`, `"Close"`, …).
pub fn write_commands(commands: &[PathCommand]) -> Result<String> {
    Ok(serde_json::to_string_pretty(commands)?)
}
