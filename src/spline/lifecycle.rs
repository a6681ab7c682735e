//! Lifecycle-Methoden des SmoothedPath (attach, Neuberechnung, detach).

use glam::DVec2;

use super::error::SplineError;
use super::state::{collect_anchors, PathPhase, SmoothedPath};
use crate::core::{LatLng, LatLngBounds, Projector, ReprojectionSignal};
use crate::render::svg_path;
use crate::shared::spline_geometry::is_closed;
use crate::shared::PathCommand;

impl<P: Projector> SmoothedPath<P> {
    /// Bindet die Projektion, meldet sich am Signal an und berechnet die erste Befehlsfolge.
    ///
    /// Ein erneuter Aufruf im Zustand `Attached` ersetzt Projektion und Abonnement.
    pub fn attach(
        &mut self,
        projector: P,
        signal: &mut ReprojectionSignal,
    ) -> Result<&[PathCommand], SplineError> {
        self.ensure_not_disposed()?;
        if let Some(old) = self.subscription.take() {
            if !signal.unsubscribe(old) && !signal.issued(old) {
                log::warn!(
                    "Altes Abonnement {} stammt von Signal {}, bleibt dort angemeldet",
                    old.get(),
                    old.signal_id()
                );
            }
        }
        let id = signal.subscribe();
        log::debug!("Pfad angemeldet (Abonnement {})", id.get());

        self.subscription = Some(id);
        self.projector = Some(projector);
        self.phase = PathPhase::Attached;
        self.recompute();
        Ok(&self.commands)
    }

    /// Zuletzt berechnete Befehle; reiner Lesezugriff ohne Neuberechnung.
    pub fn current_commands(&self) -> Result<&[PathCommand], SplineError> {
        self.ensure_attached()?;
        Ok(&self.commands)
    }

    /// Zuletzt berechnete Befehle in Ebenen-Koordinaten.
    pub fn planar_commands(&self) -> Result<&[PathCommand<DVec2>], SplineError> {
        self.ensure_attached()?;
        Ok(&self.planar_commands)
    }

    /// Ersetzt die Ankerfolge und berechnet sofort neu.
    ///
    /// Vor `attach` werden die Anker nur übernommen; die Rückgabe ist dann leer.
    pub fn set_points<I, A>(&mut self, anchors: I) -> Result<&[PathCommand], SplineError>
    where
        I: IntoIterator<Item = A>,
        A: Into<LatLng>,
    {
        self.ensure_not_disposed()?;
        let anchors = collect_anchors(anchors)?;
        self.closed = is_closed(&anchors);
        self.anchors = anchors;
        self.recompute();
        Ok(&self.commands)
    }

    /// Ersetzt den Glättungsfaktor und berechnet sofort neu.
    pub fn set_smoothing(&mut self, smoothing: f64) -> Result<&[PathCommand], SplineError> {
        self.ensure_not_disposed()?;
        self.smoothing = smoothing;
        self.recompute();
        Ok(&self.commands)
    }

    /// Vom Host aufzurufen wenn sich die Projektion geändert hat (Zoom, Pan).
    ///
    /// Gleiche Anker, neu projizierte Ebenen-Koordinaten, komplette Neuberechnung.
    pub fn on_reprojection(&mut self) -> Result<&[PathCommand], SplineError> {
        self.ensure_attached()?;
        self.recompute();
        Ok(&self.commands)
    }

    /// Gibt Abonnement, Projektion und Befehle frei. Mehrfacher Aufruf ist unkritisch.
    pub fn detach(&mut self, signal: &mut ReprojectionSignal) {
        if let Some(id) = self.subscription.take() {
            if signal.unsubscribe(id) {
                log::debug!("Pfad abgemeldet (Abonnement {})", id.get());
            } else if !signal.issued(id) {
                log::warn!(
                    "detach mit fremdem Signal: Abonnement {} gehört zu Signal {}",
                    id.get(),
                    id.signal_id()
                );
            }
        }
        self.projector = None;
        self.commands = Vec::new();
        self.planar_commands = Vec::new();
        self.phase = PathPhase::Disposed;
    }

    /// SVG-Pfaddaten (`M/L/C/Z`) in Ebenen-Koordinaten.
    pub fn svg_path_data(&self) -> Result<String, SplineError> {
        Ok(svg_path::to_path_data(self.planar_commands()?))
    }

    /// Begrenzungsrahmen aller Punkte inkl. Kontrollpunkte.
    pub fn bounds(&self) -> Result<Option<LatLngBounds>, SplineError> {
        let commands = self.current_commands()?;
        Ok(LatLngBounds::from_points(
            commands.iter().flat_map(|cmd| cmd.points()),
        ))
    }
}
