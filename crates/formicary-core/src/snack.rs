//! Food sources scattered around the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snack {
    pub pos: Vec2,
    /// Pickups left before the snack is used up.
    pub value: u32,
}

impl Snack {
    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }
}

/// Growable pool of snacks, topped up one per tick toward a target population.
#[derive(Debug, Clone)]
pub struct SnackRegistry {
    max_value: u32,
    snacks: Vec<Snack>,
}

impl SnackRegistry {
    pub fn new(max_value: u32) -> Self {
        Self {
            max_value: max_value.max(1),
            snacks: Vec::new(),
        }
    }

    /// Place a snack at `pos` with a value drawn from `1..=max_value`.
    pub fn spawn_at<R: RandomSource + ?Sized>(&mut self, pos: Vec2, rng: &mut R) -> Snack {
        let value = 1 + rng.int_inclusive(self.max_value - 1);
        let snack = Snack { pos, value };
        debug!(x = pos.x, y = pos.y, value, "snack spawned");
        self.snacks.push(snack);
        snack
    }

    pub fn insert(&mut self, snack: Snack) {
        self.snacks.push(snack);
    }

    /// Take one pickup from the snack at `index`; never goes below zero.
    pub fn decrement(&mut self, index: usize) {
        if let Some(snack) = self.snacks.get_mut(index) {
            snack.value = snack.value.saturating_sub(1);
        }
    }

    /// Remove depleted snacks, returning how many were removed.
    pub fn cull(&mut self) -> usize {
        let before = self.snacks.len();
        self.snacks.retain(|s| !s.is_depleted());
        before - self.snacks.len()
    }

    /// Add at most one snack when the population is below `target`.
    pub fn replenish<R, F>(&mut self, target: usize, rng: &mut R, mut random_pos: F) -> Option<Snack>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&mut R) -> Vec2,
    {
        if self.snacks.len() >= target {
            return None;
        }
        let pos = random_pos(rng);
        Some(self.spawn_at(pos, rng))
    }

    /// First snack strictly closer than `range` to `pos`, in registry order.
    pub fn first_near(&self, pos: Vec2, range: f32) -> Option<(usize, Snack)> {
        self.snacks
            .iter()
            .enumerate()
            .find(|(_, s)| pos.distance(s.pos) < range)
            .map(|(index, snack)| (index, *snack))
    }

    pub fn get(&self, index: usize) -> Option<&Snack> {
        self.snacks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snack> {
        self.snacks.iter()
    }

    pub fn len(&self) -> usize {
        self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty()
    }
}
