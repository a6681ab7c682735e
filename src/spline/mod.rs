//! Geglätteter Pfad mit Lifecycle: Anker, Glättung und Projektion samt Befehls-Cache.
//!
//! Aufgeteilt in:
//! - `state`: Struct, Konstruktor, Neuberechnung
//! - `lifecycle`: attach, set_points, on_reprojection, detach, Ausgaben
//! - `error`: Vorbedingungs-Fehler

mod error;
mod lifecycle;
mod state;

pub use error::SplineError;
pub use state::{PathPhase, SmoothedPath};
