//! Closed-form kinematics of the rod system
//!
//! `m1` runs on the ellipse `(-b sin t, a cos t)`, `m2` slides on the rail
//! `(b sin t, 0)`. Nothing is integrated: every frame is evaluated directly
//! from its angle `t`.

use std::f64::consts::TAU;

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, RodFrame, Trajectory};
use crate::simulation::tension::TensionProfile;

/// `n` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            // pin the last sample so it is exactly `end`
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub fn ellipse_point(a: f64, b: f64, t: f64) -> NVec2 {
    NVec2::new(-b * t.sin(), a * t.cos())
}

pub fn rail_point(b: f64, t: f64) -> NVec2 {
    NVec2::new(b * t.sin(), 0.0)
}

pub fn center_of_mass(p1: NVec2, m1: f64, p2: NVec2, m2: f64) -> NVec2 {
    (p1 * m1 + p2 * m2) / (m1 + m2)
}

/// `m1` marker turns with the ellipse parameter
pub fn m1_angle(t: f64) -> f64 {
    t
}

/// `m2` marker lines up with the rod, pointing from `m1` to `m2`
pub fn m2_angle(p1: NVec2, p2: NVec2) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Evaluate a single frame at angle `t`
pub fn rod_frame(index: usize, t: f64, params: &Parameters, tension: Option<&TensionProfile>) -> RodFrame {
    let m1 = ellipse_point(params.a, params.b, t);
    let m2 = rail_point(params.b, t);

    RodFrame {
        index,
        t,
        m1,
        m2,
        cm: center_of_mass(m1, params.m1, m2, params.m2),
        m1_angle: m1_angle(t),
        m2_angle: m2_angle(m1, m2),
        tension: tension.map(|profile| profile.arrow(t, m1, m2)),
    }
}

/// Sample one full revolution at `params.n_points` angles
pub fn sample_trajectory(params: &Parameters, tension: Option<&TensionProfile>) -> Trajectory {
    let ts = linspace(0.0, TAU, params.n_points);

    let frames: Vec<RodFrame> = ts
        .iter()
        .enumerate()
        .map(|(i, &t)| rod_frame(i, t, params, tension))
        .collect();

    let path = frames.iter().map(|f| f.m1).collect();

    Trajectory { path, frames }
}
