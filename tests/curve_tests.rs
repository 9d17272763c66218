use approx::assert_relative_eq;
use sway::{FnResponse, Interpolation, Keyframe, KeyframeCurve, LinearResponse, ResponseCurve, SwayError};

fn bumpy() -> KeyframeCurve<f32> {
    KeyframeCurve::hermite([
        Keyframe::new(0.0, 0.3).with_tangents(0.0, -4.0),
        Keyframe::new(0.5, 0.05),
        Keyframe::new(0.9, 0.2).with_tangents(3.0, 3.0),
    ])
    .unwrap()
}

#[test]
fn saturates_to_exactly_one_for_any_shape() {
    let keyed = bumpy();
    let zero = FnResponse(|_p: f32| 0.0f32);
    let wild = FnResponse(|p: f32| p * 100.0 - 7.0);
    for p in [1.0f32, -1.0, 1.0001, -3.5, 250.0, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(LinearResponse.evaluate(p), 1.0, "linear at {}", p);
        assert_eq!(keyed.evaluate(p), 1.0, "keyframe at {}", p);
        assert_eq!(zero.evaluate(p), 1.0, "zero at {}", p);
        assert_eq!(wild.evaluate(p), 1.0, "wild at {}", p);
    }
}

#[test]
fn default_curves_are_identity_on_unit_interval() {
    let keyed = KeyframeCurve::<f64>::default();
    for i in 0..10 {
        let p = i as f64 / 10.0;
        assert_eq!(LinearResponse.evaluate(p), p);
        assert_relative_eq!(keyed.evaluate(p), p, epsilon = 1e-12);
        assert_relative_eq!(keyed.evaluate(-p), p, epsilon = 1e-12);
    }
}

#[test]
fn keys_sorted_regardless_of_input_order() {
    let curve = KeyframeCurve::linear([
        Keyframe::new(0.8f32, 0.4),
        Keyframe::new(0.0, 0.0),
        Keyframe::new(0.4, 0.8),
    ])
    .unwrap();
    let times: Vec<f32> = curve.keys().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![0.0, 0.4, 0.8]);
    assert_relative_eq!(curve.evaluate(0.2), 0.4, epsilon = 1e-6);
    assert_relative_eq!(curve.evaluate(0.6), 0.6, epsilon = 1e-6);
}

#[test]
fn clamps_outside_key_range() {
    let curve = KeyframeCurve::linear([Keyframe::new(0.2f32, 0.1), Keyframe::new(0.8, 0.9)]).unwrap();
    assert_eq!(curve.evaluate(0.0), 0.1);
    assert_eq!(curve.evaluate(0.1), 0.1);
    assert_eq!(curve.evaluate(0.95), 0.9);
    assert_relative_eq!(curve.evaluate(0.5), 0.5, epsilon = 1e-6);
}

#[test]
fn single_key_is_constant() {
    let curve = KeyframeCurve::linear([Keyframe::new(0.5f32, 0.25)]).unwrap();
    assert_eq!(curve.evaluate(0.0), 0.25);
    assert_eq!(curve.evaluate(0.7), 0.25);
}

#[test]
fn hermite_hits_keys_and_follows_tangents() {
    let curve = bumpy();
    assert_eq!(curve.interpolation(), Interpolation::Hermite);
    assert_relative_eq!(curve.evaluate(0.5), 0.05, epsilon = 1e-6);
    // Steep negative out-tangent at the first key: the curve dips below the
    // straight line right after it.
    let straight: f32 = 0.3 + (0.05 - 0.3) * (0.05 / 0.5);
    assert!(curve.evaluate(0.05) < straight);
}

#[test]
fn hermite_with_unit_tangents_on_a_line_is_linear() {
    let curve = KeyframeCurve::hermite([
        Keyframe::new(0.0f64, 0.0).with_tangents(1.0, 1.0),
        Keyframe::new(1.0, 1.0).with_tangents(1.0, 1.0),
    ])
    .unwrap();
    for i in 0..10 {
        let p = i as f64 / 10.0;
        assert_relative_eq!(curve.evaluate(p), p, epsilon = 1e-12);
    }
}

#[test]
fn construction_errors() {
    let empty: [Keyframe<f32>; 0] = [];
    assert_eq!(KeyframeCurve::linear(empty), Err(SwayError::EmptyCurve));

    let nan = KeyframeCurve::linear([Keyframe::new(0.0f32, 0.0), Keyframe::new(1.0, f32::NAN)]);
    assert_eq!(nan, Err(SwayError::NonFiniteKeyframe { index: 1 }));

    let bad_tangent = KeyframeCurve::hermite([Keyframe::new(0.0f32, 0.0).with_tangents(f32::INFINITY, 0.0)]);
    assert_eq!(bad_tangent, Err(SwayError::NonFiniteKeyframe { index: 0 }));

    let duplicate = KeyframeCurve::linear([
        Keyframe::new(0.5f32, 0.0),
        Keyframe::new(0.0, 0.0),
        Keyframe::new(0.5, 1.0),
    ]);
    assert_eq!(duplicate, Err(SwayError::DuplicateKeyframe { index: 2 }));
}

#[test]
fn nan_proximity_propagates() {
    assert!(LinearResponse.evaluate(f32::NAN).is_nan());
    assert!(bumpy().evaluate(f32::NAN).is_nan());
}

#[test]
fn borrowed_curve_behaves_like_owned() {
    let curve = bumpy();
    let by_ref = &curve;
    for p in [0.0f32, 0.1, 0.45, 0.7, 1.2] {
        assert_eq!(by_ref.evaluate(p), curve.evaluate(p));
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use sway::{KeyframeCurve, SpringConfig};

    #[test]
    fn deserialized_config_is_clamped() {
        let json = r#"{"spring_strength": 4.0, "overshoot": 0.2, "curve": null}"#;
        let config: SpringConfig<f32> = serde_json::from_str(json).unwrap();
        assert_eq!(config.spring_strength(), 1.0);
        assert_eq!(config.overshoot(), 1.0);
    }

    #[test]
    fn deserialized_curve_is_validated() {
        let json = r#"{"keys": [
            {"time": 0.5, "value": 0.0, "in_tangent": 0.0, "out_tangent": 0.0},
            {"time": 0.5, "value": 1.0, "in_tangent": 0.0, "out_tangent": 0.0}
        ]}"#;
        assert!(serde_json::from_str::<KeyframeCurve<f32>>(json).is_err());
    }
}
