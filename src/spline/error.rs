//! Vorbedingungs-Fehler des `SmoothedPath`-Lifecycles.

use thiserror::Error;

/// Verletzte Vorbedingung beim Zugriff auf einen `SmoothedPath`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Ankerfolge ohne Punkte
    #[error("Pfad braucht mindestens einen Ankerpunkt")]
    EmptyAnchors,
    /// Zugriff auf Geometrie vor `attach()`
    #[error("Pfad ist noch keiner Projektion zugeordnet (attach fehlt)")]
    NotAttached,
    /// Zugriff nach `detach()`
    #[error("Pfad wurde bereits freigegeben (detach)")]
    Disposed,
}
