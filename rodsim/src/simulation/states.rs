//! Core state types for the rod animation.
//!
//! - `RodFrame`   one sampled instant: both masses, center of mass, marker angles
//! - `Trajectory` the static `m1` path plus every frame, index-aligned
//! - `TensionArrow` the illustrative tension vector drawn at `m1`

use nalgebra::Vector2;
use serde::Serialize;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TensionArrow {
    pub head: NVec2,    // arrowhead, always at m1
    pub d: NVec2,       // tail to head, length = scale * |magnitude|
    pub magnitude: f64, // signed spline value
}

impl TensionArrow {
    pub fn tail(&self) -> NVec2 {
        self.head - self.d
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RodFrame {
    pub index: usize,
    pub t: f64,        // ellipse parameter (radians)
    pub m1: NVec2,     // mass on the ellipse
    pub m2: NVec2,     // mass on the rail
    pub cm: NVec2,     // center of mass
    pub m1_angle: f64, // counter-clockwise marker rotation (radians)
    pub m2_angle: f64, // rod direction from m1 to m2 (radians)
    pub tension: Option<TensionArrow>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Trajectory {
    pub path: Vec<NVec2>, // sampled m1 ellipse
    pub frames: Vec<RodFrame>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
