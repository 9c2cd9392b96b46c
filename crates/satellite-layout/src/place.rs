//! Radial placement of satellites around the center.

use std::f64::consts::TAU;

use rand::seq::SliceRandom;
use rand::Rng;
use satellite_core::{GraphView, NodeIndex, Position};
use tracing::warn;

use crate::prune::Pruned;

/// Share of the area reserved for amplifying edges below the threshold.
pub const AMPLIFY_SCOPE: f32 = 0.5;

/// Inputs of the radius formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialParams {
    pub area_size: i32,
    pub threshold: f32,
    pub max_weight: f32,
}

/// Where a satellite ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub node: NodeIndex,
    pub weight: f32,
    pub radius: f32,
    /// Polar angle in radians, a multiple of `TAU / n`.
    pub angle: f64,
}

/// Distance from the center for an edge of the given weight.
///
/// Below the threshold the radius grows as the weight drops, from half the
/// area size up to the full area size. At or above the threshold the radius
/// shrinks linearly with the weight and turns negative once the weight exceeds
/// `max_weight - threshold`, which puts the satellite on the opposite side of
/// the circle. Divisions by zero yield `0`.
pub fn radius(weight: f32, params: &RadialParams) -> f32 {
    let RadialParams {
        area_size,
        threshold,
        max_weight,
    } = *params;
    let area = area_size as f32;

    let r = if weight < threshold {
        if threshold == 0.0 {
            return 0.0;
        }
        ((threshold - weight) / threshold * AMPLIFY_SCOPE + (1.0 - AMPLIFY_SCOPE)) * area
    } else {
        let span = max_weight - threshold;
        if span == 0.0 {
            return 0.0;
        }
        (max_weight - threshold - weight) * (1.0 - AMPLIFY_SCOPE) * area / span
    };

    if r.is_finite() {
        r
    } else {
        0.0
    }
}

/// Put the center at the origin and its satellites on a circle.
///
/// Satellites are shuffled with `rng` before being assigned the angles
/// `0, TAU/n, 2*TAU/n, ...`, so the angular order does not follow weight.
pub fn place<R: Rng + ?Sized>(
    view: &mut GraphView,
    pruned: &Pruned,
    params: &RadialParams,
    rng: &mut R,
) -> Vec<Placement> {
    view.set_position(pruned.earth, Position::ORIGIN);

    let mut satellites = pruned.satellites.clone();
    if satellites.is_empty() {
        return Vec::new();
    }
    satellites.shuffle(rng);

    let base_angle = TAU / satellites.len() as f64;
    satellites
        .iter()
        .enumerate()
        .map(|(i, satellite)| {
            let r = radius(satellite.weight, params);
            if r < 0.0 {
                warn!(
                    weight = satellite.weight,
                    radius = r,
                    "Edge weight above max_weight - threshold, satellite flipped across the center"
                );
            }

            let angle = base_angle * i as f64;
            let r = f64::from(r);
            view.set_position(
                satellite.node,
                Position::new((r * angle.cos()) as f32, (r * angle.sin()) as f32),
            );

            Placement {
                node: satellite.node,
                weight: satellite.weight,
                radius: r as f32,
                angle,
            }
        })
        .collect()
}
