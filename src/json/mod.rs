//! JSON Import/Export an der Host-Grenze.
//!
//! Anker kommen als Liste von `[lat, lng]`-Paaren oder `{lat, lng}`-Objekten,
//! Befehle gehen als serialisierte `PathCommand`-Liste zurück.

pub mod parser;
pub mod writer;

pub use parser::parse_anchors;
pub use writer::write_commands;
