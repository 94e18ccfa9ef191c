//! Planar helpers on top of [`glam::Vec2`].

use std::f32::consts::TAU;

use glam::Vec2;

use crate::config::WorldBounds;
use crate::random::RandomSource;

pub trait Vec2Ext {
    /// Angle to rotate from this heading onto `other`'s heading, in `[0, 2π)`.
    ///
    /// Operand order matters: `a.heading_to(b)` and `b.heading_to(a)` sum to a
    /// full turn unless the headings coincide.
    fn heading_to(self, other: Vec2) -> f32;

    /// Unit vector pointing from `self` toward `target`, or `None` when the two
    /// points coincide and no direction exists.
    fn direction_to(self, target: Vec2) -> Option<Vec2>;
}

impl Vec2Ext for Vec2 {
    fn heading_to(self, other: Vec2) -> f32 {
        let mut angle = other.y.atan2(other.x) - self.y.atan2(self.x);
        if angle < 0.0 {
            angle += TAU;
        }
        // A tiny negative difference can round up to a full turn in f32.
        if angle >= TAU {
            angle = 0.0;
        }
        angle
    }

    fn direction_to(self, target: Vec2) -> Option<Vec2> {
        (target - self).try_normalize()
    }
}

/// Redraws allowed before [`random_unit`] settles for [`Vec2::X`].
const UNIT_REDRAWS: usize = 16;

/// Random heading of magnitude 1.
///
/// Normalises a vector with both components drawn from `[-0.5, 0.5)`. The
/// square sampling area skews headings slightly toward the diagonals; the
/// colony's wandering behaviour is tuned against that skew. A source that
/// keeps landing on the centre gets [`Vec2::X`].
pub fn random_unit<R: RandomSource + ?Sized>(rng: &mut R) -> Vec2 {
    for _ in 0..UNIT_REDRAWS {
        let v = Vec2::new(rng.unit_interval() - 0.5, rng.unit_interval() - 0.5);
        if let Some(unit) = v.try_normalize() {
            return unit;
        }
    }
    Vec2::X
}

/// Point with integer coordinates drawn from `0..=width` and `0..=height`.
pub fn random_position<R: RandomSource + ?Sized>(rng: &mut R, bounds: WorldBounds) -> Vec2 {
    Vec2::new(
        rng.int_inclusive(bounds.width) as f32,
        rng.int_inclusive(bounds.height) as f32,
    )
}
