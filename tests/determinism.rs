use sway::{Keyframe, KeyframeCurve, LookDelta, SpringAxis, SpringConfig, SpringSway, SwayConfig};

fn look_at(frame: usize) -> LookDelta<f32> {
    let t = frame as f32;
    LookDelta::new((t * 0.37).sin() * 3.0, (t * 0.11).cos() - 0.5)
}

#[test]
fn axis_deterministic() {
    let curve = KeyframeCurve::hermite([
        Keyframe::new(0.0f32, 0.1).with_tangents(0.0, 2.0),
        Keyframe::new(1.0, 1.0),
    ])
    .unwrap();
    let config = SpringConfig::new()
        .with_spring_strength(0.35)
        .with_overshoot(7.5)
        .with_curve(curve);

    let results: Vec<Vec<f32>> = (0..10).map(|_| {
        let mut axis = SpringAxis::with_config(0.2, config.clone());
        (0..600)
            .map(|i| {
                let target = if (i / 45) % 2 == 0 { 1.5 } else { -0.75 };
                let dt = if i % 7 == 0 { 0.0 } else { 1.0 / 60.0 };
                axis.step(target, dt)
            })
            .collect()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn sway_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut sway = SpringSway::new(SwayConfig::<f32>::default());
        (0..300).map(|i| sway.update(look_at(i), 1.0 / 60.0)).collect::<Vec<_>>()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.rotation, b.rotation);
            assert_eq!(a.position, b.position);
        }
    }
}
