#![no_main]

use libfuzzer_sys::fuzz_target;
use smooth_path::{
    cubic_count, parse_anchors, to_path_data, AffineProjector, ReprojectionSignal, SmoothedPath,
    SplineOptions,
};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Fehler sind erlaubt, Panics nicht
    let Ok(anchors) = parse_anchors(content) else {
        return;
    };
    let anchor_count = anchors.len();
    let mut signal = ReprojectionSignal::new();
    let Ok(mut path) = SmoothedPath::new(anchors, SplineOptions::default()) else {
        return;
    };
    let Ok(commands) = path.attach(AffineProjector::IDENTITY, &mut signal) else {
        return;
    };
    let cubics = cubic_count(commands);
    assert!(cubics <= anchor_count);
    let _ = to_path_data(path.planar_commands().unwrap_or(&[]));
    path.detach(&mut signal);
});
