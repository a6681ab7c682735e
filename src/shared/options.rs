//! Zentrale Konfiguration für Glättung und Ansicht.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Glättung ────────────────────────────────────────────────────────

/// Standard-Glättungsfaktor (Anteil der Nachbar-Distanz pro Kontrollpunkt).
pub const DEFAULT_SMOOTHING: f64 = 0.15;

// ── Mercator-Ansicht ────────────────────────────────────────────────

/// Kachelgröße in Pixeln bei Zoom 0.
pub const MERCATOR_TILE_SIZE: f64 = 256.0;
/// Maximale Breite der sphärischen Mercator-Projektion (Grad).
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_8;
/// Minimaler Zoom-Level.
pub const VIEW_ZOOM_MIN: f64 = 0.0;
/// Maximaler Zoom-Level.
pub const VIEW_ZOOM_MAX: f64 = 22.0;
/// Zoom-Schritt bei stufenweisem Zoom.
pub const VIEW_ZOOM_STEP: f64 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Optionen eines einzelnen geglätteten Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineOptions {
    /// Glättungsfaktor; 0 = Polyline, Werte ≥ 1 können Schleifen erzeugen (nicht geklemmt)
    pub smoothing: f64,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

/// Optionen der Mercator-Ansicht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Kachelgröße in Pixeln bei Zoom 0
    pub tile_size: f64,
    /// Minimaler Zoom-Level
    pub zoom_min: f64,
    /// Maximaler Zoom-Level
    pub zoom_max: f64,
    /// Zoom-Schritt für `zoom_in`/`zoom_out`
    pub zoom_step: f64,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            tile_size: MERCATOR_TILE_SIZE,
            zoom_min: VIEW_ZOOM_MIN,
            zoom_max: VIEW_ZOOM_MAX,
            zoom_step: VIEW_ZOOM_STEP,
        }
    }
}

impl ViewOptions {
    /// Prüft Wertebereiche: endliche Werte, `zoom_min <= zoom_max`, positive Kachelgröße.
    pub fn validate(&self) -> anyhow::Result<()> {
        let values = [self.tile_size, self.zoom_min, self.zoom_max, self.zoom_step];
        if values.iter().any(|v| !v.is_finite()) {
            anyhow::bail!("Ansichts-Optionen enthalten nicht-endliche Werte: {:?}", self);
        }
        if self.zoom_min > self.zoom_max {
            anyhow::bail!(
                "zoom_min ({}) liegt über zoom_max ({})",
                self.zoom_min,
                self.zoom_max
            );
        }
        if self.tile_size <= 0.0 {
            anyhow::bail!("tile_size muss positiv sein: {}", self.tile_size);
        }
        Ok(())
    }
}

/// Alle Optionen, gespeichert als TOML mit den Abschnitten `[spline]` und `[view]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveOptions {
    #[serde(default)]
    pub spline: SplineOptions,
    #[serde(default)]
    pub view: ViewOptions,
}

impl CurveOptions {
    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content).context("Optionen konnten nicht gelesen werden")?;
        opts.view.validate().context("Ungültige Ansichts-Optionen")?;
        Ok(opts)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
