//! Smooth Path Library.
//!
//! Glättet eine geordnete Punktfolge zu kubischen Bézier-Segmenten für
//! SVG-artige Pfade. Der Host liefert die Projektion und meldet Zoom/Pan,
//! die Bibliothek liefert die Zeichenbefehle.

pub mod core;
pub mod json;
pub mod render;
pub mod shared;
pub mod spline;

pub use crate::core::{
    shift_anchors, AffineProjector, AnchorInput, AnchorShift, LatLng, LatLngBounds, MercatorView,
    Projector, ReprojectionSignal, SubscriptionId,
};
pub use json::{parse_anchors, write_commands};
pub use render::to_path_data;
pub use shared::{
    assemble, cubic_count, derive, is_closed, smooth, ControlPointPair, CurveOptions,
    PathCommand, SplineOptions, ViewOptions, DEFAULT_SMOOTHING,
};
pub use spline::{PathPhase, SmoothedPath, SplineError};
