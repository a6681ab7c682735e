//! Geographische Ankerpunkte, Eingabe-Normalisierung und Begrenzungsrahmen.

use serde::{Deserialize, Serialize};

/// Punkt im logischen Koordinatensystem des Hosts (Breite/Länge).
///
/// Gleichheit ist exakte numerische Gleichheit beider Komponenten,
/// darauf beruht die Erkennung geschlossener Pfade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Breite (Nord/Süd)
    pub lat: f64,
    /// Länge (Ost/West)
    pub lng: f64,
}

impl LatLng {
    /// Erstellt einen neuen Punkt
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück wenn beide Komponenten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// `[lat, lng]` wie beim Host üblich.
impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Ankerpunkt in einer der beiden vom Host akzeptierten Formen.
///
/// JSON: `[lat, lng]` oder `{ "lat": .., "lng": .. }` (auch `lon`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnchorInput {
    /// Zahlenpaar `[lat, lng]`
    Pair([f64; 2]),
    /// Benanntes Objekt mit `lat`/`lng`
    Named {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
    },
}

impl From<AnchorInput> for LatLng {
    fn from(input: AnchorInput) -> Self {
        match input {
            AnchorInput::Pair(pair) => pair.into(),
            AnchorInput::Named { lat, lng } => Self::new(lat, lng),
        }
    }
}

/// Verschiebung eines Koordinatensatzes (alle Werte in Grad, fehlend = 0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorShift {
    pub up: f64,
    pub down: f64,
    pub left: f64,
    pub right: f64,
}

impl AnchorShift {
    /// Wendet die Verschiebung auf einen einzelnen Punkt an.
    pub fn apply(&self, point: LatLng) -> LatLng {
        LatLng::new(
            point.lat + self.up - self.down,
            point.lng + self.right - self.left,
        )
    }
}

/// Verschiebt alle Punkte und gibt einen neuen Satz zurück; die Eingabe bleibt unverändert.
pub fn shift_anchors(points: &[LatLng], shift: AnchorShift) -> Vec<LatLng> {
    points.iter().map(|p| shift.apply(*p)).collect()
}

/// Achsenparalleler Begrenzungsrahmen in Breite/Länge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    /// Süd-West-Ecke
    pub south_west: LatLng,
    /// Nord-Ost-Ecke
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Rahmen um einen einzelnen Punkt.
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Kleinster Rahmen um alle Punkte, `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Vergrößert den Rahmen so, dass `point` enthalten ist.
    ///
    /// NaN-Koordinaten werden übernommen: der Rahmen ist danach nicht mehr endlich.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = min_nan(self.south_west.lat, point.lat);
        self.south_west.lng = min_nan(self.south_west.lng, point.lng);
        self.north_east.lat = max_nan(self.north_east.lat, point.lat);
        self.north_east.lng = max_nan(self.north_east.lng, point.lng);
    }

    /// Gibt `true` zurück wenn alle Ecken endlich sind.
    pub fn is_finite(&self) -> bool {
        self.south_west.is_finite() && self.north_east.is_finite()
    }

    /// Prüft ob `point` im Rahmen liegt (Ränder inklusive).
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Mittelpunkt des Rahmens
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// `f64::min` mit NaN-Weitergabe
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// `f64::max` mit NaN-Weitergabe
fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_anchor_input_both_shapes_normalize_equal() {
        let pair: AnchorInput = serde_json::from_str("[2.5, -6.0]").unwrap();
        let named: AnchorInput = serde_json::from_str(r#"{"lat": 2.5, "lng": -6.0}"#).unwrap();
        let lon: AnchorInput = serde_json::from_str(r#"{"lat": 2.5, "lon": -6.0}"#).unwrap();
        assert_eq!(LatLng::from(pair), LatLng::new(2.5, -6.0));
        assert_eq!(LatLng::from(named), LatLng::from(pair));
        assert_eq!(LatLng::from(lon), LatLng::from(pair));
    }

    #[test]
    fn test_shift_down_and_right() {
        let points = vec![LatLng::new(3.0, -6.0), LatLng::new(2.0, -5.0)];
        let shifted = shift_anchors(
            &points,
            AnchorShift {
                down: 1.5,
                right: 0.5,
                ..Default::default()
            },
        );
        assert_relative_eq!(shifted[0].lat, 1.5);
        assert_relative_eq!(shifted[0].lng, -5.5);
        assert_relative_eq!(shifted[1].lat, 0.5);
        // Eingabe bleibt unverändert
        assert_relative_eq!(points[0].lat, 3.0);
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = LatLngBounds::from_points([
            LatLng::new(1.0, 4.0),
            LatLng::new(-2.0, 6.0),
            LatLng::new(0.5, 5.0),
        ])
        .unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-2.0, 4.0));
        assert_eq!(bounds.north_east, LatLng::new(1.0, 6.0));
        assert!(bounds.contains(LatLng::new(0.0, 5.0)));
        assert!(!bounds.contains(LatLng::new(2.0, 5.0)));
        assert_relative_eq!(bounds.center().lat, -0.5);
    }

    #[test]
    fn test_bounds_empty_is_none() {
        assert!(LatLngBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_propagate_nan() {
        let bounds = LatLngBounds::from_points([
            LatLng::new(1.0, 4.0),
            LatLng::new(f64::NAN, 6.0),
            LatLng::new(0.5, 5.0),
        ])
        .unwrap();
        assert!(bounds.south_west.lat.is_nan());
        assert!(bounds.north_east.lat.is_nan());
        assert_relative_eq!(bounds.north_east.lng, 6.0);
        assert!(!bounds.is_finite());

        // NaN im ersten Punkt bleibt ebenfalls erhalten
        let first_nan =
            LatLngBounds::from_points([LatLng::new(f64::NAN, 0.0), LatLng::new(1.0, 1.0)]).unwrap();
        assert!(first_nan.south_west.lat.is_nan());
    }
}
