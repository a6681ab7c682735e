//! Integrationstests für den kompletten Ablauf:
//! - JSON-Anker laden, an eine Mercator-Ansicht hängen, Befehle lesen
//! - Host-Schleife über das Reprojektions-Signal (Zoom)
//! - Optionen aus TOML, SVG- und JSON-Ausgabe

use glam::DVec2;
use smooth_path::{
    cubic_count, parse_anchors, shift_anchors, write_commands, AnchorShift, CurveOptions, LatLng,
    MercatorView, PathCommand, ReprojectionSignal, SmoothedPath, SplineError, SplineOptions,
};
use std::cell::RefCell;
use std::rc::Rc;

const SHAPE1: &str = include_str!("fixtures/shape1.json");

type SharedView = Rc<RefCell<MercatorView>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ansicht wie in der Demo: Zoom 8, zentriert auf (2, -5), 800×600 Pixel.
fn demo_view() -> SharedView {
    let mut view = MercatorView::default();
    view.set_zoom(8.0);
    view.center_on(LatLng::new(2.0, -5.0), DVec2::new(800.0, 600.0));
    Rc::new(RefCell::new(view))
}

#[test]
fn test_fixture_shape_is_closed_loop() {
    init_logger();
    let anchors = parse_anchors(SHAPE1).expect("Fixture muss parsebar sein");
    assert_eq!(anchors.len(), 13);

    let view = demo_view();
    let mut signal = ReprojectionSignal::new();
    let mut path = SmoothedPath::new(anchors.clone(), SplineOptions::default()).unwrap();
    let commands = path.attach(Rc::clone(&view), &mut signal).unwrap().to_vec();

    assert!(path.is_closed());
    // 12 eindeutige Anker → 12 Segmente inkl. Schlusssegment
    assert_eq!(cubic_count(&commands), 12);
    assert_eq!(commands.last(), Some(&PathCommand::Close));

    let bounds = path.bounds().unwrap().expect("Pfad hat Punkte");
    for anchor in &anchors {
        assert!(bounds.contains(*anchor), "Anker außerhalb: {anchor:?}");
    }
}

#[test]
fn test_shifted_open_shape() {
    init_logger();
    let anchors = parse_anchors(SHAPE1).unwrap();
    let open = &anchors[..anchors.len() - 1];
    let shifted = shift_anchors(
        open,
        AnchorShift {
            down: 1.5,
            ..Default::default()
        },
    );

    let mut signal = ReprojectionSignal::new();
    let mut path = SmoothedPath::new(shifted, SplineOptions::default()).unwrap();
    let commands = path.attach(demo_view(), &mut signal).unwrap();

    assert_eq!(cubic_count(commands), 11);
    assert!(!commands.contains(&PathCommand::Close));
    let svg = path.svg_path_data().unwrap();
    assert!(svg.starts_with('M'));
    assert!(!svg.contains('Z'));
}

#[test]
fn test_host_loop_redraws_only_subscribed_paths() {
    init_logger();
    let view = demo_view();
    let mut signal = ReprojectionSignal::new();

    let anchors = parse_anchors(SHAPE1).unwrap();
    let mut paths = vec![
        SmoothedPath::new(anchors.clone(), SplineOptions::default()).unwrap(),
        SmoothedPath::new(anchors, SplineOptions { smoothing: 0.3 }).unwrap(),
    ];
    for path in &mut paths {
        path.attach(Rc::clone(&view), &mut signal).unwrap();
    }
    let planar_before: Vec<Vec<_>> = paths
        .iter()
        .map(|p| p.planar_commands().unwrap().to_vec())
        .collect();

    paths[1].detach(&mut signal);

    view.borrow_mut().zoom_in();
    for id in signal.emit() {
        for path in paths.iter_mut() {
            if path.subscription() == Some(id) {
                path.on_reprojection().unwrap();
            }
        }
    }

    // Angemeldeter Pfad: neue Ebenen-Koordinaten
    assert_ne!(paths[0].planar_commands().unwrap(), planar_before[0].as_slice());
    // Freigegebener Pfad: kein Zugriff mehr
    assert_eq!(paths[1].planar_commands().err(), Some(SplineError::Disposed));
}

#[test]
fn test_options_file_drives_smoothing() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("smooth_path.toml");
    std::fs::write(&config, "[spline]\nsmoothing = 0.0\n\n[view]\nzoom_max = 12.0\n").unwrap();

    let options = CurveOptions::load_from_file(&config);
    assert_eq!(options.view.zoom_max, 12.0);

    let anchors = [
        LatLng::new(2.0, -6.0),
        LatLng::new(2.5, -5.5),
        LatLng::new(2.0, -5.0),
    ];
    let mut signal = ReprojectionSignal::new();
    let mut view = MercatorView::new(options.view);
    view.set_zoom(20.0);
    assert_eq!(view.zoom(), 12.0);

    let mut path = SmoothedPath::new(anchors, options.spline).unwrap();
    let commands = path.attach(view, &mut signal).unwrap();

    // Glättung 0: Griffe fallen auf die Anker
    let PathCommand::CubicTo(c1, c2, p) = commands[2] else {
        panic!("CubicTo erwartet: {:?}", commands[2]);
    };
    for (actual, expected) in [(c1, anchors[0]), (c2, anchors[1]), (p, anchors[1])] {
        assert!((actual.lat - expected.lat).abs() < 1e-9);
        assert!((actual.lng - expected.lng).abs() < 1e-9);
    }
}

#[test]
fn test_commands_as_json() {
    init_logger();
    let mut signal = ReprojectionSignal::new();
    let mut path = SmoothedPath::new(
        [[0.0, 0.0], [1.0, 1.0], [0.0, 2.0], [0.0, 0.0]],
        SplineOptions::default(),
    )
    .unwrap();
    path.attach(smooth_path::AffineProjector::IDENTITY, &mut signal)
        .unwrap();

    let json = write_commands(path.current_commands().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let list = value.as_array().expect("JSON-Liste erwartet");
    assert_eq!(list.len(), 6);
    assert!(list[0].get("MoveTo").is_some());
    assert_eq!(list[5], "Close");
}
