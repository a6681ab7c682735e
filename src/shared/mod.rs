//! Geteilte, layer-neutrale Bausteine: Geometrie, Zeichenbefehle, Optionen.

pub mod options;
mod path_command;
pub mod spline_geometry;

pub use options::{CurveOptions, SplineOptions, ViewOptions, DEFAULT_SMOOTHING};
pub use path_command::{cubic_count, PathCommand};
pub use spline_geometry::{assemble, derive, is_closed, smooth, ControlPointPair};
