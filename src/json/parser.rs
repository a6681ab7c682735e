//! Parser für Ankerlisten im JSON-Format.

use anyhow::{bail, Context, Result};

use crate::core::{AnchorInput, LatLng};

/// Parst eine Ankerliste; beide Eingabeformen dürfen gemischt vorkommen.
///
/// Eine leere Liste ist ein Fehler, weil ein Pfad mindestens einen Anker braucht.
pub fn parse_anchors(json_content: &str) -> Result<Vec<LatLng>> {
    let inputs: Vec<AnchorInput> =
        serde_json::from_str(json_content).context("Ankerliste ist kein gültiges JSON")?;
    if inputs.is_empty() {
        bail!("Ankerliste ist leer");
    }
    Ok(inputs.into_iter().map(LatLng::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_shapes() {
        let anchors =
            parse_anchors(r#"[[2.95, -5.97], {"lat": 2.59, "lng": -6.15}, {"lat": 2.4, "lon": -5.8}]"#)
                .unwrap();
        assert_eq!(
            anchors,
            vec![
                LatLng::new(2.95, -5.97),
                LatLng::new(2.59, -6.15),
                LatLng::new(2.4, -5.8),
            ]
        );
    }

    #[test]
    fn test_parse_fails_for_empty_list() {
        let err = parse_anchors("[]").expect_err("Parser sollte fehlschlagen");
        assert!(err.to_string().contains("leer"));
    }

    #[test]
    fn test_parse_fails_for_wrong_arity() {
        assert!(parse_anchors("[[1.0, 2.0, 3.0]]").is_err());
        assert!(parse_anchors(r#"[{"lat": 1.0}]"#).is_err());
    }
}
