//! State-Definition und Neuberechnung des geglätteten Pfads.

use glam::DVec2;

use super::error::SplineError;
use crate::core::{LatLng, Projector, SubscriptionId};
use crate::shared::spline_geometry::{assemble, derive, is_closed};
use crate::shared::{PathCommand, SplineOptions};

/// Lifecycle-Phase eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPhase {
    /// Erstellt, noch ohne Projektion (keine Geometrie)
    Detached,
    /// Projektion gebunden, Befehle aktuell
    Attached,
    /// Freigegeben, keine weiteren Zugriffe
    Disposed,
}

/// Geglätteter Pfad durch eine Ankerfolge.
///
/// Hält Anker, Glättung und die zuletzt berechneten Befehle. Jede Änderung
/// der Anker, der Glättung oder der Projektion erzeugt die komplette
/// Befehlsfolge neu.
#[derive(Debug)]
pub struct SmoothedPath<P> {
    /// Ankerfolge, wird nur als Ganzes ersetzt
    pub(crate) anchors: Vec<LatLng>,
    pub(crate) smoothing: f64,
    /// Abgeleitet: erster == letzter Anker bei mindestens 3 Punkten
    pub(crate) closed: bool,
    pub(crate) projector: Option<P>,
    /// Abonnement am Reprojektions-Signal des Hosts
    pub(crate) subscription: Option<SubscriptionId>,
    /// Letzte Befehle in Host-Koordinaten
    pub(crate) commands: Vec<PathCommand>,
    /// Dieselben Befehle in Ebenen-Koordinaten (für den Renderer)
    pub(crate) planar_commands: Vec<PathCommand<DVec2>>,
    pub(crate) phase: PathPhase,
}

impl<P: Projector> SmoothedPath<P> {
    /// Erstellt einen Pfad; Geometrie entsteht erst beim `attach`.
    ///
    /// Akzeptiert alles was sich in `LatLng` wandeln lässt (`[lat, lng]`,
    /// `(lat, lng)`, `AnchorInput`).
    pub fn new<I, A>(anchors: I, options: SplineOptions) -> Result<Self, SplineError>
    where
        I: IntoIterator<Item = A>,
        A: Into<LatLng>,
    {
        let anchors = collect_anchors(anchors)?;
        Ok(Self {
            closed: is_closed(&anchors),
            anchors,
            smoothing: options.smoothing,
            projector: None,
            subscription: None,
            commands: Vec::new(),
            planar_commands: Vec::new(),
            phase: PathPhase::Detached,
        })
    }

    /// Aktuelle Ankerfolge
    pub fn anchors(&self) -> &[LatLng] {
        &self.anchors
    }

    /// Aktueller Glättungsfaktor
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Gibt `true` zurück wenn der Pfad geschlossen ist.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn phase(&self) -> PathPhase {
        self.phase
    }

    /// Abonnement am Reprojektions-Signal (nur im Zustand `Attached`).
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Gebundene Projektion
    pub fn projector(&self) -> Option<&P> {
        self.projector.as_ref()
    }

    pub(crate) fn ensure_not_disposed(&self) -> Result<(), SplineError> {
        match self.phase {
            PathPhase::Disposed => Err(SplineError::Disposed),
            _ => Ok(()),
        }
    }

    pub(crate) fn ensure_attached(&self) -> Result<(), SplineError> {
        match self.phase {
            PathPhase::Attached => Ok(()),
            PathPhase::Detached => Err(SplineError::NotAttached),
            PathPhase::Disposed => Err(SplineError::Disposed),
        }
    }

    /// Berechnet die komplette Befehlsfolge neu (ohne Projektion: no-op).
    pub(crate) fn recompute(&mut self) {
        let Some(projector) = self.projector.as_ref() else {
            return;
        };

        let planar: Vec<DVec2> = self.anchors.iter().map(|a| projector.project(*a)).collect();
        let control_points = derive(&planar, self.smoothing, self.closed);
        let planar_commands = assemble(&planar, &control_points, self.closed);
        let commands = planar_commands
            .iter()
            .map(|cmd| cmd.map_points(|p| projector.unproject(p)))
            .collect();

        log::debug!(
            "Pfad neu berechnet: {} Anker, {} Befehle, geschlossen: {}",
            self.anchors.len(),
            planar_commands.len(),
            self.closed
        );

        self.planar_commands = planar_commands;
        self.commands = commands;
    }
}

/// Sammelt die Eingabe in eine neue Ankerfolge; leere Eingaben sind ein Fehler.
pub(crate) fn collect_anchors<I, A>(anchors: I) -> Result<Vec<LatLng>, SplineError>
where
    I: IntoIterator<Item = A>,
    A: Into<LatLng>,
{
    let anchors: Vec<LatLng> = anchors.into_iter().map(Into::into).collect();
    if anchors.is_empty() {
        return Err(SplineError::EmptyAnchors);
    }
    Ok(anchors)
}
