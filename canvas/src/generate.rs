//! Random polygon generation for the "Create" action.
//!
//! Vertices are spread around the bounding box centre at evenly spaced angles,
//! each nudged by a small random angle and an independent per-axis radius
//! factor. The RNG is injected so callers (and tests) control determinism.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::polygon::{Polygon, PolygonId};

/// Produce a fresh batch of polygons for the buffer.
pub fn generate_polygons<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Vec<Polygon> {
    let count = rng.random_range(config.count_min..=config.count_max);
    (0..count).map(|_| random_polygon(rng, config)).collect()
}

/// Produce a single random polygon.
pub fn random_polygon<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Polygon {
    let n = rng.random_range(config.vertices_min..=config.vertices_max);
    let cx = config.width / 2.0;
    let cy = config.height / 2.0;
    let jitter_span = config.radius_jitter_max - config.radius_jitter_min;

    #[allow(clippy::cast_precision_loss)]
    let step = TAU / n as f64;
    let points = (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64 + rng.random::<f64>() * config.angle_jitter;
            let fx = config.radius_jitter_min + rng.random::<f64>() * jitter_span;
            let fy = config.radius_jitter_min + rng.random::<f64>() * jitter_span;
            [cx + config.radius * angle.cos() * fx, cy + config.radius * angle.sin() * fy]
        })
        .collect();

    Polygon {
        id: random_id(rng),
        w: config.width,
        h: config.height,
        points,
        fill: config.fill.clone(),
    }
}

/// A random (version 4) UUID string drawn from `rng`.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> PolygonId {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}
