//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point in world space (world units, y = up).
pub type WorldPoint = DVec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of running ticks processed this round.
    pub tick: u64,
    /// Elapsed running time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// The visible world rectangle. Targets cross it vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

impl Default for Playfield {
    fn default() -> Self {
        let half = DVec2::new(
            crate::constants::PLAYFIELD_HALF_WIDTH,
            crate::constants::PLAYFIELD_HALF_HEIGHT,
        );
        Self::new(-half, half)
    }
}

impl Playfield {
    pub fn new(min: WorldPoint, max: WorldPoint) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> WorldPoint {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Collision shape of a target, centred on its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitShape {
    Circle { radius: f64 },
    Rect { half_width: f64, half_height: f64 },
}

impl Default for HitShape {
    fn default() -> Self {
        HitShape::Circle {
            radius: crate::constants::DEFAULT_HIT_RADIUS,
        }
    }
}

impl HitShape {
    /// Point-in-shape test for a shape centred at `center`. Edges count as inside.
    pub fn contains(&self, center: WorldPoint, point: WorldPoint) -> bool {
        let d = point - center;
        match *self {
            HitShape::Circle { radius } => d.length_squared() <= radius * radius,
            HitShape::Rect {
                half_width,
                half_height,
            } => d.x.abs() <= half_width && d.y.abs() <= half_height,
        }
    }

    /// Whether all dimensions are positive and finite.
    pub fn is_valid(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match *self {
            HitShape::Circle { radius } => positive(radius),
            HitShape::Rect {
                half_width,
                half_height,
            } => positive(half_width) && positive(half_height),
        }
    }
}
