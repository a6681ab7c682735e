//! Zeichenbefehle des geglätteten Pfads.

use serde::Serialize;

use crate::core::LatLng;

/// Ein einzelner Zeichenbefehl.
///
/// `P` ist der Punkttyp: `glam::DVec2` in der Ebene, `LatLng` nach der
/// Rückprojektion in Host-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand<P = LatLng> {
    /// Neuer Startpunkt
    MoveTo(P),
    /// Gerade Linie zum Punkt
    LineTo(P),
    /// Kubische Bézier-Kurve: zwei Kontrollpunkte, dann Zielpunkt
    CubicTo(P, P, P),
    /// Schließt den Pfad zum Startpunkt
    Close,
}

impl<P: Copy> PathCommand<P> {
    /// Wendet `f` auf alle Punkte des Befehls an.
    pub fn map_points<Q>(self, mut f: impl FnMut(P) -> Q) -> PathCommand<Q> {
        match self {
            Self::MoveTo(p) => PathCommand::MoveTo(f(p)),
            Self::LineTo(p) => PathCommand::LineTo(f(p)),
            Self::CubicTo(c1, c2, p) => {
                let c1 = f(c1);
                let c2 = f(c2);
                PathCommand::CubicTo(c1, c2, f(p))
            }
            Self::Close => PathCommand::Close,
        }
    }

    /// Zielpunkt des Befehls (`None` bei `Close`).
    pub fn end_point(&self) -> Option<P> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::CubicTo(_, _, p) => Some(p),
            Self::Close => None,
        }
    }

    /// Alle Punkte inkl. Kontrollpunkte, in Befehlsreihenfolge.
    pub fn points(&self) -> impl Iterator<Item = P> {
        let slots = match *self {
            Self::MoveTo(p) | Self::LineTo(p) => [Some(p), None, None],
            Self::CubicTo(c1, c2, p) => [Some(c1), Some(c2), Some(p)],
            Self::Close => [None, None, None],
        };
        slots.into_iter().flatten()
    }

    pub fn is_cubic(&self) -> bool {
        matches!(self, Self::CubicTo(..))
    }
}

/// Anzahl der `CubicTo`-Befehle einer Sequenz.
pub fn cubic_count<P: Copy>(commands: &[PathCommand<P>]) -> usize {
    commands.iter().filter(|c| c.is_cubic()).count()
}
