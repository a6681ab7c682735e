//! Reine Geometrie-Funktionen für geglättete Bézier-Pfade.
//!
//! Layer-neutral: arbeitet nur auf Ebenen-Koordinaten (`DVec2`) und kennt
//! weder Projektion noch Lifecycle. Jeder Aufruf baut neue Vektoren,
//! Eingaben werden nie verändert.

use std::f64::consts::PI;

use glam::DVec2;

use super::path_command::PathCommand;

/// Die beiden Bézier-Griffe eines Ankers.
///
/// Bei offenen Pfaden hat der erste Anker keinen eingehenden und der letzte
/// keinen ausgehenden Griff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointPair {
    /// Griff der in den Anker hineinführt (zweiter Kontrollpunkt des vorigen Segments)
    pub incoming: Option<DVec2>,
    /// Griff der aus dem Anker herausführt (erster Kontrollpunkt des nächsten Segments)
    pub outgoing: Option<DVec2>,
}

/// Ein Pfad ist geschlossen wenn er mindestens 3 Punkte hat und der letzte exakt dem ersten entspricht.
pub fn is_closed<T: PartialEq>(anchors: &[T]) -> bool {
    anchors.len() >= 3 && anchors.first() == anchors.last()
}

/// Anker ohne den doppelten Schlusspunkt eines geschlossenen Pfads.
fn unique_anchors(anchors: &[DVec2], closed: bool) -> &[DVec2] {
    if closed {
        &anchors[..anchors.len() - 1]
    } else {
        anchors
    }
}

/// Berechnet einen Griff von `current` aus.
///
/// Richtung = Linie `previous → next` (bei `reverse` um π gedreht),
/// Länge = Länge dieser Linie × `smoothing`. Fehlende Nachbarn werden vom
/// Aufrufer durch `current` ersetzt.
fn control_point(
    current: DVec2,
    previous: DVec2,
    next: DVec2,
    smoothing: f64,
    reverse: bool,
) -> DVec2 {
    let line = next - previous;
    let angle = line.y.atan2(line.x) + if reverse { PI } else { 0.0 };
    current + DVec2::from_angle(angle) * (line.length() * smoothing)
}

/// Beide Griffe eines Ankers mit gegebenen Nachbarn.
fn pair_between(current: DVec2, previous: DVec2, next: DVec2, smoothing: f64) -> ControlPointPair {
    ControlPointPair {
        incoming: Some(control_point(current, previous, next, smoothing, true)),
        outgoing: Some(control_point(current, previous, next, smoothing, false)),
    }
}

/// Leitet die Kontrollpunkte für alle Anker ab.
///
/// - `anchors`: Ebenen-Koordinaten; bei `closed` ist der letzte Punkt ein Duplikat des ersten
/// - `closed` ohne doppelten Schlusspunkt wird als offen behandelt
/// - Ergebnis: ein Paar pro (eindeutigem) Anker, leer bei weniger als 2 Ankern
pub fn derive(anchors: &[DVec2], smoothing: f64, closed: bool) -> Vec<ControlPointPair> {
    if anchors.len() < 2 {
        return Vec::new();
    }
    // geschlossen nur mit doppeltem Schlusspunkt
    let closed = closed && is_closed(anchors);
    let points = unique_anchors(anchors, closed);
    let n = points.len();

    let mut pairs = Vec::with_capacity(n);
    for (i, &current) in points.iter().enumerate() {
        // Randpunkte: fehlender Nachbar = Anker selbst
        let previous = if i > 0 { points[i - 1] } else { current };
        let next = if i + 1 < n { points[i + 1] } else { current };
        pairs.push(ControlPointPair {
            incoming: (i > 0).then(|| control_point(current, previous, next, smoothing, true)),
            outgoing: (i + 1 < n).then(|| control_point(current, previous, next, smoothing, false)),
        });
    }

    if closed {
        // Erster und letzter Anker mit zyklischen Nachbarn neu berechnen
        pairs[0] = pair_between(points[0], points[n - 1], points[1], smoothing);
        pairs[n - 1] = pair_between(points[n - 1], points[n - 2], points[0], smoothing);
    }

    pairs
}

/// Baut die Zeichenbefehle aus Ankern und Kontrollpunkten.
///
/// `MoveTo(a0)`, `LineTo(a0)`, dann ein `CubicTo` pro Anker-Paar; geschlossene
/// Pfade bekommen zusätzlich das Segment zurück zu `a0` und `Close`.
/// Fehlende Griffe fallen auf den jeweiligen Anker zurück.
pub fn assemble(
    anchors: &[DVec2],
    control_points: &[ControlPointPair],
    closed: bool,
) -> Vec<PathCommand<DVec2>> {
    let Some(&start) = anchors.first() else {
        return Vec::new();
    };
    if anchors.len() == 1 {
        return vec![PathCommand::MoveTo(start)];
    }
    let closed = closed && is_closed(anchors);
    let points = unique_anchors(anchors, closed);
    let n = points.len();
    let segment_count = if closed { n } else { n - 1 };

    let outgoing = |i: usize| {
        control_points
            .get(i)
            .and_then(|pair| pair.outgoing)
            .unwrap_or(points[i])
    };
    let incoming = |i: usize| {
        control_points
            .get(i)
            .and_then(|pair| pair.incoming)
            .unwrap_or(points[i])
    };

    let mut commands = Vec::with_capacity(segment_count + 3);
    commands.push(PathCommand::MoveTo(start));
    commands.push(PathCommand::LineTo(start));
    for i in 0..segment_count {
        let j = (i + 1) % n;
        commands.push(PathCommand::CubicTo(outgoing(i), incoming(j), points[j]));
    }
    if closed {
        commands.push(PathCommand::Close);
    }
    commands
}

/// Kompletter Durchlauf: Geschlossenheit erkennen, Kontrollpunkte ableiten, Befehle bauen.
pub fn smooth(anchors: &[DVec2], smoothing: f64) -> Vec<PathCommand<DVec2>> {
    let closed = is_closed(anchors);
    let control_points = derive(anchors, smoothing, closed);
    assemble(anchors, &control_points, closed)
}
