//! Decaying scent markers laid by ants on their way home.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub pos: Vec2,
    /// Remaining time before the marker evaporates.
    pub lifetime: f32,
    /// Distance to the nest, fixed when the marker is laid.
    pub nest_dist: f32,
}

impl Trail {
    pub fn new(pos: Vec2, lifetime: f32, nest: Vec2) -> Self {
        Self {
            pos,
            lifetime,
            nest_dist: pos.distance(nest),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// Unordered pool of live trail markers.
#[derive(Debug, Clone)]
pub struct TrailRegistry {
    nest: Vec2,
    initial_lifetime: f32,
    trails: Vec<Trail>,
}

impl TrailRegistry {
    pub fn new(nest: Vec2, initial_lifetime: f32) -> Self {
        Self {
            nest,
            initial_lifetime,
            trails: Vec::new(),
        }
    }

    /// Lay a fresh marker at `pos` and return a copy of it.
    pub fn deposit(&mut self, pos: Vec2) -> Trail {
        let trail = Trail::new(pos, self.initial_lifetime, self.nest);
        self.trails.push(trail);
        trail
    }

    pub fn tick(&mut self, dt: f32) {
        for trail in &mut self.trails {
            trail.lifetime -= dt;
        }
    }

    /// Drop expired markers, returning how many were removed.
    pub fn cull(&mut self) -> usize {
        let before = self.trails.len();
        self.trails.retain(|t| !t.is_expired());
        before - self.trails.len()
    }

    /// Markers strictly closer than `range` to `pos`, in registry order.
    pub fn query_near(&self, pos: Vec2, range: f32) -> Vec<&Trail> {
        self.trails
            .iter()
            .filter(|t| pos.distance(t.pos) < range)
            .collect()
    }

    /// The marker an ant at `pos` follows, if any is in range.
    ///
    /// Candidates are ordered by lifetime, then stably re-ordered by nest
    /// distance, and the last one wins: the farthest marker from the nest, with
    /// ties going to the longest-lived. Both passes must stay stable sorts so
    /// that equal nest distances keep their lifetime order.
    pub fn select(&self, pos: Vec2, range: f32) -> Option<Trail> {
        let mut candidates = self.query_near(pos, range);
        candidates.sort_by(|a, b| a.lifetime.total_cmp(&b.lifetime));
        candidates.sort_by(|a, b| a.nest_dist.total_cmp(&b.nest_dist));
        candidates.pop().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Insert a marker as-is, bypassing the fixed initial lifetime.
    pub fn insert(&mut self, trail: Trail) {
        self.trails.push(trail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(nest_dist: f32, lifetime: f32) -> Trail {
        Trail {
            pos: Vec2::new(nest_dist, 0.0),
            lifetime,
            nest_dist,
        }
    }

    fn registry_with(trails: &[Trail]) -> TrailRegistry {
        let mut registry = TrailRegistry::new(Vec2::ZERO, 10.0);
        for trail in trails {
            registry.insert(*trail);
        }
        registry
    }

    #[test]
    fn deposit_caches_nest_distance() {
        let mut registry = TrailRegistry::new(Vec2::new(1.0, 1.0), 10.0);
        let trail = registry.deposit(Vec2::new(4.0, 5.0));
        assert_eq!(trail.nest_dist, 5.0);
        assert_eq!(trail.lifetime, 10.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn farthest_from_nest_wins_regardless_of_lifetime() {
        let registry = registry_with(&[marker(5.0, 2.0), marker(5.0, 9.0), marker(8.0, 1.0)]);
        let chosen = registry.select(Vec2::new(6.0, 0.0), 20.0).unwrap();
        assert_eq!(chosen.nest_dist, 8.0);
        assert_eq!(chosen.lifetime, 1.0);
    }

    #[test]
    fn equal_nest_distance_prefers_longer_lifetime() {
        let a = Trail {
            pos: Vec2::new(5.0, 0.0),
            lifetime: 3.0,
            nest_dist: 5.0,
        };
        let b = Trail {
            pos: Vec2::new(0.0, 5.0),
            lifetime: 7.0,
            nest_dist: 5.0,
        };
        for order in [[a, b], [b, a]] {
            let chosen = registry_with(&order).select(Vec2::ZERO, 20.0).unwrap();
            assert_eq!(chosen.lifetime, 7.0);
        }
    }

    #[test]
    fn out_of_range_markers_are_ignored() {
        let registry = registry_with(&[marker(5.0, 2.0), marker(50.0, 9.0)]);
        let near = registry.query_near(Vec2::ZERO, 20.0);
        assert_eq!(near.len(), 1);
        assert_eq!(registry.select(Vec2::ZERO, 20.0).unwrap().nest_dist, 5.0);
        assert!(registry.select(Vec2::new(-100.0, 0.0), 20.0).is_none());
    }

    #[test]
    fn range_is_exclusive() {
        let registry = registry_with(&[marker(20.0, 1.0)]);
        assert!(registry.query_near(Vec2::ZERO, 20.0).is_empty());
    }

    #[test]
    fn tick_then_cull_expires_markers() {
        let mut registry = registry_with(&[marker(1.0, 0.5), marker(2.0, 3.0)]);
        registry.tick(0.5);
        assert_eq!(registry.cull(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next().unwrap().lifetime, 2.5);
    }

    #[test]
    fn zero_tick_leaves_lifetimes_alone() {
        let mut registry = registry_with(&[marker(1.0, 0.5)]);
        registry.tick(0.0);
        assert_eq!(registry.iter().next().unwrap().lifetime, 0.5);
        assert_eq!(registry.cull(), 0);
    }
}
