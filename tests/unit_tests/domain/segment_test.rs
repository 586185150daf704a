use kuching::domain::AudioSegment;

#[test]
fn given_valid_bounds_when_creating_then_duration_is_difference() {
    let segment = AudioSegment::new(1.5, 3.2, "hello");

    assert_eq!(segment.start, 1.5);
    assert_eq!(segment.end, 3.2);
    assert!((segment.duration() - 1.7).abs() < 1e-9);
}

#[test]
fn given_reversed_bounds_when_creating_then_end_clamped_to_start() {
    let segment = AudioSegment::new(2.0, 1.0, "oops");

    assert_eq!(segment.start, 2.0);
    assert_eq!(segment.end, 2.0);
    assert_eq!(segment.duration(), 0.0);
}

#[test]
fn given_confidence_when_creating_then_carried() {
    let segment = AudioSegment::with_confidence(0.0, 1.0, "hi", 0.87);

    assert_eq!(segment.confidence, Some(0.87));
}

#[test]
fn given_no_confidence_when_serializing_then_field_omitted() {
    let segment = AudioSegment::new(0.0, 1.0, "hi");

    let json = serde_json::to_string(&segment).unwrap();

    assert!(!json.contains("confidence"));
}

#[test]
fn given_segment_when_round_tripping_through_json_then_equal() {
    let segment = AudioSegment::with_confidence(0.5, 2.25, "round trip", 0.5);

    let json = serde_json::to_string(&segment).unwrap();
    let back: AudioSegment = serde_json::from_str(&json).unwrap();

    assert_eq!(back, segment);
}
