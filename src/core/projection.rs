//! Projektion zwischen logischen Koordinaten (Breite/Länge) und der Ebene.
//!
//! Kontrollpunkte werden ausschließlich in der Ebene berechnet. Der Host
//! liefert die Projektion; hier liegen der Trait und zwei fertige Varianten
//! (affin für planare Hosts, sphärischer Mercator für Kartenansichten).

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use glam::{DAffine2, DVec2};

use super::point::LatLng;
use crate::shared::options::{ViewOptions, MERCATOR_MAX_LATITUDE};

/// Abbildung zwischen Host-Koordinaten und Ebenen-Koordinaten.
///
/// Beide Richtungen müssen für einen festen Ansichtszustand deterministisch
/// sein und werden pro Anker und Neuberechnung aufgerufen.
pub trait Projector {
    /// Host-Koordinate → Ebene
    fn project(&self, point: LatLng) -> DVec2;
    /// Ebene → Host-Koordinate
    fn unproject(&self, planar: DVec2) -> LatLng;
}

impl<T: Projector + ?Sized> Projector for &T {
    fn project(&self, point: LatLng) -> DVec2 {
        (**self).project(point)
    }

    fn unproject(&self, planar: DVec2) -> LatLng {
        (**self).unproject(planar)
    }
}

impl<T: Projector + ?Sized> Projector for Rc<T> {
    fn project(&self, point: LatLng) -> DVec2 {
        (**self).project(point)
    }

    fn unproject(&self, planar: DVec2) -> LatLng {
        (**self).unproject(planar)
    }
}

/// Geteilte, veränderliche Ansicht (`Rc<RefCell<MercatorView>>`).
///
/// Der Host darf während einer Neuberechnung keinen `borrow_mut` halten.
impl<T: Projector> Projector for RefCell<T> {
    fn project(&self, point: LatLng) -> DVec2 {
        self.borrow().project(point)
    }

    fn unproject(&self, planar: DVec2) -> LatLng {
        self.borrow().unproject(planar)
    }
}

/// Affine Projektion: `x = lng`, `y = lat`, danach `transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineProjector {
    transform: DAffine2,
    inverse: DAffine2,
}

impl AffineProjector {
    /// Identität: Länge wird zu x, Breite zu y.
    pub const IDENTITY: Self = Self {
        transform: DAffine2::IDENTITY,
        inverse: DAffine2::IDENTITY,
    };

    /// Erstellt eine Projektion aus einer invertierbaren Transformation.
    pub fn new(transform: DAffine2) -> Self {
        Self {
            transform,
            inverse: transform.inverse(),
        }
    }

    /// Gleichmäßige Skalierung plus Verschiebung (einfache Zoom-Ansicht).
    pub fn scale_translate(scale: f64, translation: DVec2) -> Self {
        Self::new(DAffine2::from_scale_angle_translation(
            DVec2::splat(scale),
            0.0,
            translation,
        ))
    }

    /// Aktuelle Transformation
    pub fn transform(&self) -> DAffine2 {
        self.transform
    }
}

impl Default for AffineProjector {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Projector for AffineProjector {
    fn project(&self, point: LatLng) -> DVec2 {
        self.transform
            .transform_point2(DVec2::new(point.lng, point.lat))
    }

    fn unproject(&self, planar: DVec2) -> LatLng {
        let v = self.inverse.transform_point2(planar);
        LatLng::new(v.y, v.x)
    }
}

/// Sphärische Web-Mercator-Ansicht mit Zoom und Pixel-Ursprung.
///
/// Ebene = Layer-Pixel: bei Zoom `z` misst die Welt `tile_size * 2^z` Pixel,
/// `pixel_origin` wird abgezogen (Pan).
#[derive(Debug, Clone, PartialEq)]
pub struct MercatorView {
    zoom: f64,
    /// Linke obere Ecke des Layers in absoluten Pixeln
    pub pixel_origin: DVec2,
    options: ViewOptions,
}

impl MercatorView {
    /// Erstellt eine Ansicht bei Zoom 0 ohne Verschiebung.
    pub fn new(options: ViewOptions) -> Self {
        Self {
            zoom: options.zoom_min.max(0.0).min(options.zoom_max),
            pixel_origin: DVec2::ZERO,
            options,
        }
    }

    /// Aktueller Zoom-Level
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Setzt den Zoom-Level (geklemmt auf den konfigurierten Bereich).
    pub fn set_zoom(&mut self, zoom: f64) {
        // Optionen können min > max haben, f64::clamp würde dann paniken
        self.zoom = zoom.max(self.options.zoom_min).min(self.options.zoom_max);
    }

    /// Ändert den Zoom-Level um `delta` Stufen.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Einen Zoom-Schritt hinein
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.options.zoom_step);
    }

    /// Einen Zoom-Schritt hinaus
    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.options.zoom_step);
    }

    /// Verschiebt die Ansicht (Pan) um `delta` Pixel.
    pub fn pan(&mut self, delta: DVec2) {
        self.pixel_origin += delta;
    }

    /// Zentriert die Ansicht auf `center` für einen Viewport der Größe `viewport_size`.
    pub fn center_on(&mut self, center: LatLng, viewport_size: DVec2) {
        self.pixel_origin = self.world_pixel(center) - viewport_size / 2.0;
    }

    /// Weltgröße in Pixeln beim aktuellen Zoom.
    pub fn world_size(&self) -> f64 {
        self.options.tile_size * self.zoom.exp2()
    }

    /// Absolute Pixel-Position (ohne Abzug des Ursprungs).
    fn world_pixel(&self, point: LatLng) -> DVec2 {
        let lat = point
            .lat
            .clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE)
            .to_radians();
        let sin = lat.sin();
        let x = point.lng / 360.0 + 0.5;
        let y = 0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI);
        DVec2::new(x, y) * self.world_size()
    }
}

impl Default for MercatorView {
    fn default() -> Self {
        Self::new(ViewOptions::default())
    }
}

impl Projector for MercatorView {
    fn project(&self, point: LatLng) -> DVec2 {
        self.world_pixel(point) - self.pixel_origin
    }

    fn unproject(&self, planar: DVec2) -> LatLng {
        let v = (planar + self.pixel_origin) / self.world_size();
        let lng = (v.x - 0.5) * 360.0;
        let lat = 2.0 * ((0.5 - v.y) * 2.0 * PI).exp().atan() - PI / 2.0;
        LatLng::new(lat.to_degrees(), lng)
    }
}
