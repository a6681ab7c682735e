//! Übersetzt Zeichenbefehle in SVG-Pfaddaten (`d`-Attribut).

use std::fmt::Write;

use glam::DVec2;

use crate::shared::PathCommand;

/// Erzeugt `M x y L x y C x1 y1 x2 y2 x y … Z` aus Ebenen-Befehlen.
///
/// Nicht-endliche Koordinaten werden unverändert ausgegeben (`NaN`, `inf`);
/// der Renderer verwirft solche Pfade.
pub fn to_path_data(commands: &[PathCommand<DVec2>]) -> String {
    let mut out = String::with_capacity(commands.len() * 32);
    for cmd in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        // write! auf String kann nicht fehlschlagen
        let _ = match *cmd {
            PathCommand::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
            PathCommand::CubicTo(c1, c2, p) => write!(
                out,
                "C{} {} {} {} {} {}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            PathCommand::Close => write!(out, "Z"),
        };
    }
    out
}
