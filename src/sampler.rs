// Simulated metric generation. Stateless: every call draws a fresh sample
// from the injected random source.

use crate::models::{
    Category, InfrastructureSample, POINT_COUNT, POINT_SPACING_MS, PerformancePoint,
    PlatformSample, RESOURCES, ResourceUsage, Sample, SoftwareSample, TIERS, TierUsers,
};
use rand::Rng;

/// Resource usage bounds, percent (inclusive).
const USAGE_MIN_PCT: f64 = 20.0;
const USAGE_MAX_PCT: f64 = 95.0;

/// Request rate bounds, requests/min (max exclusive).
const REQUESTS_MIN: u32 = 100;
const REQUESTS_MAX: u32 = 1000;

/// Response time bounds, milliseconds (inclusive).
const RESPONSE_MIN_MS: f64 = 50.0;
const RESPONSE_MAX_MS: f64 = 200.0;

/// Per-tier user count bounds (max exclusive).
const USERS_MIN: u32 = 100;
const USERS_MAX: u32 = 1000;

/// Usage percentage per fixed resource, uniform in [20, 95].
pub fn infrastructure_sample<R: Rng>(rng: &mut R) -> InfrastructureSample {
    InfrastructureSample {
        resources: RESOURCES
            .iter()
            .map(|name| ResourceUsage {
                resource: (*name).to_string(),
                usage_percent: rng.gen_range(USAGE_MIN_PCT..=USAGE_MAX_PCT),
            })
            .collect(),
    }
}

/// Request rate and response time for the trailing 10 minutes, newest point
/// first. Timestamps are strictly decreasing in one-minute steps from
/// `now_ms`.
pub fn platform_sample<R: Rng>(rng: &mut R, now_ms: u64) -> PlatformSample {
    PlatformSample {
        points: (0..POINT_COUNT)
            .map(|i| PerformancePoint {
                timestamp_ms: now_ms - i as u64 * POINT_SPACING_MS,
                requests_per_min: rng.gen_range(REQUESTS_MIN..REQUESTS_MAX),
                response_time_ms: rng.gen_range(RESPONSE_MIN_MS..=RESPONSE_MAX_MS),
            })
            .collect(),
    }
}

/// User count per fixed subscription tier, uniform in [100, 1000).
pub fn software_sample<R: Rng>(rng: &mut R) -> SoftwareSample {
    SoftwareSample {
        tiers: TIERS
            .iter()
            .map(|name| TierUsers {
                tier: (*name).to_string(),
                users: rng.gen_range(USERS_MIN..USERS_MAX),
            })
            .collect(),
    }
}

/// Draw one fresh sample for `category`. `now_ms` is the generation time in
/// epoch millis; only the platform sample reads it.
pub fn generate<R: Rng>(category: Category, rng: &mut R, now_ms: u64) -> Sample {
    match category {
        Category::Iaas => Sample::Iaas(infrastructure_sample(rng)),
        Category::Paas => Sample::Paas(platform_sample(rng, now_ms)),
        Category::Saas => Sample::Saas(software_sample(rng)),
    }
}
