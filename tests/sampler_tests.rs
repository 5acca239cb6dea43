// Generator invariant tests: shapes, bounds, timestamp spacing, seeded
// determinism

use cloudboard::models::{Category, RESOURCES, Sample, TIERS};
use cloudboard::sampler;
use rand::SeedableRng;
use rand::rngs::StdRng;

const NOW_MS: u64 = 1_700_000_000_000;

#[test]
fn test_infrastructure_sample_shape_and_bounds() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let s = sampler::infrastructure_sample(&mut rng);
        assert_eq!(s.resources.len(), 4);
        for (entry, expected) in s.resources.iter().zip(RESOURCES) {
            assert_eq!(entry.resource, expected);
            assert!(
                (20.0..=95.0).contains(&entry.usage_percent),
                "usage {} out of bounds",
                entry.usage_percent
            );
        }
    }
}

#[test]
fn test_platform_sample_shape_and_bounds() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let s = sampler::platform_sample(&mut rng, NOW_MS);
        assert_eq!(s.points.len(), 10);
        assert_eq!(s.points[0].timestamp_ms, NOW_MS);
        for p in &s.points {
            assert!((100..1000).contains(&p.requests_per_min));
            assert!((50.0..=200.0).contains(&p.response_time_ms));
        }
    }
}

#[test]
fn test_platform_timestamps_strictly_decreasing_by_one_minute() {
    let mut rng = rand::thread_rng();
    let s = sampler::platform_sample(&mut rng, NOW_MS);
    for pair in s.points.windows(2) {
        assert_eq!(pair[0].timestamp_ms - pair[1].timestamp_ms, 60_000);
    }
}

#[test]
fn test_software_sample_shape_and_bounds() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let s = sampler::software_sample(&mut rng);
        assert_eq!(s.tiers.len(), 3);
        for (entry, expected) in s.tiers.iter().zip(TIERS) {
            assert_eq!(entry.tier, expected);
            assert!((100..1000).contains(&entry.users));
        }
        let total: u64 = s.tiers.iter().map(|t| t.users as u64).sum();
        assert_eq!(s.total_users(), total);
    }
}

#[test]
fn test_generators_deterministic_under_seeded_rng() {
    let a = sampler::generate(Category::Paas, &mut StdRng::seed_from_u64(7), NOW_MS);
    let b = sampler::generate(Category::Paas, &mut StdRng::seed_from_u64(7), NOW_MS);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );

    let a = sampler::generate(Category::Iaas, &mut StdRng::seed_from_u64(7), NOW_MS);
    let b = sampler::generate(Category::Iaas, &mut StdRng::seed_from_u64(7), NOW_MS);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_consecutive_platform_samples_are_drawn_fresh() {
    // Two ticks five seconds apart: both anchored to their own generation
    // time, and drawn from the RNG stream rather than cached.
    let mut rng = StdRng::seed_from_u64(42);
    let first = sampler::platform_sample(&mut rng, NOW_MS);
    let second = sampler::platform_sample(&mut rng, NOW_MS + 5000);

    assert_eq!(first.points[0].timestamp_ms, NOW_MS);
    assert_eq!(second.points[0].timestamp_ms, NOW_MS + 5000);
    for s in [&first, &second] {
        for pair in s.points.windows(2) {
            assert!(pair[0].timestamp_ms > pair[1].timestamp_ms);
        }
    }
    let rates = |s: &cloudboard::models::PlatformSample| {
        s.points.iter().map(|p| p.requests_per_min).collect::<Vec<_>>()
    };
    assert_ne!(rates(&first), rates(&second));
}

#[test]
fn test_generate_dispatches_by_category() {
    let mut rng = rand::thread_rng();
    for category in [Category::Iaas, Category::Paas, Category::Saas] {
        let sample = sampler::generate(category, &mut rng, NOW_MS);
        assert_eq!(sample.category(), category);
        match (category, &sample) {
            (Category::Iaas, Sample::Iaas(_)) => {}
            (Category::Paas, Sample::Paas(_)) => {}
            (Category::Saas, Sample::Saas(_)) => {}
            _ => panic!("sample shape does not match category"),
        }
    }
}
