//! Host-Renderer-Anbindung: Ausgabeformate für die berechneten Befehle.
//!
//! Das eigentliche Zeichnen übernimmt der Host; hier entsteht nur das
//! Format, das er konsumiert.

pub mod svg_path;

pub use svg_path::to_path_data;
