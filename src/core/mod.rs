//! Core-Domänentypen: Ankerpunkte, Projektion, Reprojektions-Signal.

pub mod point;
pub mod projection;
pub mod signal;

pub use point::{shift_anchors, AnchorInput, AnchorShift, LatLng, LatLngBounds};
pub use projection::{AffineProjector, MercatorView, Projector};
pub use signal::{ReprojectionSignal, SubscriptionId};
