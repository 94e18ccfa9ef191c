//! Per-ant sensing, decision and movement.
//!
//! Each tick an ant scans its sensor radius, picks a new heading from what it
//! found, and then integrates its position. Ants never hold on to a snack or a
//! trail between ticks; every decision starts from a fresh scan.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ColonyConfig;
use crate::geometry::{random_position, random_unit, Vec2Ext};
use crate::random::RandomSource;
use crate::snack::{Snack, SnackRegistry};
use crate::trail::{Trail, TrailRegistry};

/// Headings onto a trail point this close to opposite the trail's outward
/// direction are replaced by the outward direction itself.
const BEHIND_TRAIL_MIN: f32 = 0.8 * PI;
const BEHIND_TRAIL_MAX: f32 = 1.2 * PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntState {
    Searching,
    Carrying,
}

/// What an ant picked up on its sensors this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sensed {
    Snack { index: usize, snack: Snack },
    Trail(Trail),
    Nothing,
}

/// Notable outcome of one ant update, tallied by the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntEvent {
    PickedUp,
    Delivered,
    LaidTrail,
}

/// Shared world state an ant may read, and touch only through
/// [`TrailRegistry::deposit`] and [`SnackRegistry::decrement`].
pub struct Surroundings<'a, R: ?Sized> {
    pub nest: Vec2,
    pub snacks: &'a mut SnackRegistry,
    pub trails: &'a mut TrailRegistry,
    pub rng: &'a mut R,
    pub config: &'a ColonyConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ant {
    pub pos: Vec2,
    /// Unit heading; displacement is `velocity * speed * dt`.
    pub velocity: Vec2,
    pub speed: f32,
    pub sensor_range: f32,
    /// Footprint, doubling as the touch distance for snacks, trails and the nest.
    pub size: f32,
    pub state: AntState,
}

impl Ant {
    pub fn new(pos: Vec2, velocity: Vec2, config: &ColonyConfig) -> Self {
        Self {
            pos,
            velocity,
            speed: config.ant_speed,
            sensor_range: config.sensor_range,
            size: config.ant_size,
            state: AntState::Searching,
        }
    }

    pub fn is_carrying(&self) -> bool {
        self.state == AntState::Carrying
    }

    /// The first snack in range wins outright; otherwise the preferred trail
    /// marker in range, if any.
    pub fn scan(&self, snacks: &SnackRegistry, trails: &TrailRegistry) -> Sensed {
        if let Some((index, snack)) = snacks.first_near(self.pos, self.sensor_range) {
            return Sensed::Snack { index, snack };
        }
        match trails.select(self.pos, self.sensor_range) {
            Some(trail) => Sensed::Trail(trail),
            None => Sensed::Nothing,
        }
    }

    /// Sense, decide and move for one tick.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        world: &mut Surroundings<'_, R>,
    ) -> Option<AntEvent> {
        let sensed = self.scan(world.snacks, world.trails);
        let event = self.decide(sensed, world);
        self.advance(dt);
        event
    }

    fn decide<R: RandomSource + ?Sized>(
        &mut self,
        sensed: Sensed,
        world: &mut Surroundings<'_, R>,
    ) -> Option<AntEvent> {
        let nest = world.nest;
        match self.state {
            AntState::Carrying => {
                if self.pos.distance(nest) < self.size {
                    self.state = AntState::Searching;
                    self.velocity = random_unit(&mut *world.rng);
                    trace!(x = self.pos.x, y = self.pos.y, "snack delivered");
                    return Some(AntEvent::Delivered);
                }
                // Heading home stays as set at pickup.
                if sensed == Sensed::Nothing {
                    world.trails.deposit(self.pos);
                    trace!(x = self.pos.x, y = self.pos.y, "trail laid");
                    return Some(AntEvent::LaidTrail);
                }
                None
            }
            AntState::Searching => match sensed {
                Sensed::Snack { index, snack } => {
                    if self.pos.distance(snack.pos) < self.size {
                        self.state = AntState::Carrying;
                        self.steer(self.pos.direction_to(nest));
                        world.snacks.decrement(index);
                        trace!(
                            x = self.pos.x,
                            y = self.pos.y,
                            left = snack.value.saturating_sub(1),
                            "snack picked up"
                        );
                        Some(AntEvent::PickedUp)
                    } else {
                        self.steer(self.pos.direction_to(snack.pos));
                        None
                    }
                }
                Sensed::Trail(trail) => {
                    self.follow_trail(&trail, nest);
                    None
                }
                Sensed::Nothing => {
                    if self.pos.distance(nest) > world.config.far_from_home {
                        let target = random_position(&mut *world.rng, world.config.world);
                        self.steer(self.pos.direction_to(target));
                    }
                    None
                }
            },
        }
    }

    fn follow_trail(&mut self, trail: &Trail, nest: Vec2) {
        let outward = nest.direction_to(trail.pos);
        if self.pos.distance(trail.pos) < self.size {
            self.steer(outward);
            return;
        }
        let toward = self.pos.direction_to(trail.pos);
        let heading = match (toward, outward) {
            (Some(toward), Some(outward)) => {
                let angle = toward.heading_to(outward);
                if angle > BEHIND_TRAIL_MIN && angle < BEHIND_TRAIL_MAX {
                    Some(outward)
                } else {
                    Some(toward)
                }
            }
            (toward, outward) => toward.or(outward),
        };
        self.steer(heading);
    }

    /// Take a new unit heading; a degenerate one keeps the current heading.
    fn steer(&mut self, heading: Option<Vec2>) {
        if let Some(heading) = heading {
            self.velocity = heading;
        }
    }

    /// Integrate position. No clamping to the world bounds.
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.velocity * (self.speed * dt);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const EPS: f32 = 1e-4;

    struct Fixture {
        config: ColonyConfig,
        snacks: SnackRegistry,
        trails: TrailRegistry,
        rng: StdRng,
    }

    impl Fixture {
        fn new() -> Self {
            let mut config = ColonyConfig::default();
            config.nest_pos = Some(Vec2::ZERO);
            Self {
                snacks: SnackRegistry::new(config.snack_max_value),
                trails: TrailRegistry::new(Vec2::ZERO, config.trail_lifetime),
                rng: StdRng::seed_from_u64(9),
                config,
            }
        }

        fn tick(&mut self, ant: &mut Ant, dt: f32) -> Option<AntEvent> {
            let mut world = Surroundings {
                nest: Vec2::ZERO,
                snacks: &mut self.snacks,
                trails: &mut self.trails,
                rng: &mut self.rng,
                config: &self.config,
            };
            ant.update(dt, &mut world)
        }

        fn ant_at(&self, pos: Vec2, velocity: Vec2) -> Ant {
            Ant::new(pos, velocity, &self.config)
        }
    }

    #[test]
    fn adjacent_snack_is_picked_up_and_ant_turns_home() {
        let mut fx = Fixture::new();
        fx.snacks.insert(Snack {
            pos: Vec2::new(100.0, 0.0),
            value: 4,
        });
        let mut ant = fx.ant_at(Vec2::new(101.0, 0.0), Vec2::Y);
        assert_eq!(fx.tick(&mut ant, 0.0), Some(AntEvent::PickedUp));
        assert!(ant.is_carrying());
        assert!((ant.velocity - Vec2::new(-1.0, 0.0)).length() < EPS);
        assert_eq!(fx.snacks.get(0).unwrap().value, 3);
    }

    #[test]
    fn distant_snack_attracts_searching_ant() {
        let mut fx = Fixture::new();
        fx.snacks.insert(Snack {
            pos: Vec2::new(100.0, 10.0),
            value: 4,
        });
        let mut ant = fx.ant_at(Vec2::new(100.0, 0.0), Vec2::X);
        assert_eq!(fx.tick(&mut ant, 0.2), None);
        assert!((ant.velocity - Vec2::Y).length() < EPS);
        assert!((ant.pos - Vec2::new(100.0, 5.0)).length() < EPS);
    }

    #[test]
    fn carrying_ant_at_nest_drops_food_and_wanders() {
        let mut fx = Fixture::new();
        let mut ant = fx.ant_at(Vec2::new(1.0, 1.0), Vec2::new(-1.0, 0.0));
        ant.state = AntState::Carrying;
        assert_eq!(fx.tick(&mut ant, 0.0), Some(AntEvent::Delivered));
        assert_eq!(ant.state, AntState::Searching);
        assert!((ant.velocity.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn carrying_ant_lays_trail_only_when_none_in_range() {
        let mut fx = Fixture::new();
        let heading = Vec2::new(-1.0, 0.0);
        let mut ant = fx.ant_at(Vec2::new(100.0, 0.0), heading);
        ant.state = AntState::Carrying;
        assert_eq!(fx.tick(&mut ant, 0.1), Some(AntEvent::LaidTrail));
        assert_eq!(fx.trails.len(), 1);
        assert_eq!(fx.trails.iter().next().unwrap().nest_dist, 100.0);
        // Fresh marker is still within sensor range.
        assert_eq!(fx.tick(&mut ant, 0.1), None);
        assert_eq!(fx.trails.len(), 1);
        assert_eq!(ant.velocity, heading);
    }

    #[test]
    fn carrying_ant_keeps_heading_even_when_off_course() {
        let mut fx = Fixture::new();
        let mut ant = fx.ant_at(Vec2::new(100.0, 0.0), Vec2::Y);
        ant.state = AntState::Carrying;
        fx.tick(&mut ant, 1.0);
        assert_eq!(ant.velocity, Vec2::Y);
        assert!((ant.pos - Vec2::new(100.0, 25.0)).length() < EPS);
    }

    #[test]
    fn touching_a_trail_sends_ant_outward() {
        let mut fx = Fixture::new();
        fx.trails.deposit(Vec2::new(0.0, 50.0));
        let mut ant = fx.ant_at(Vec2::new(1.0, 50.0), Vec2::X);
        fx.tick(&mut ant, 0.0);
        assert!((ant.velocity - Vec2::Y).length() < EPS);
    }

    #[test]
    fn trail_ahead_is_approached_directly() {
        let mut fx = Fixture::new();
        fx.trails.deposit(Vec2::new(0.0, 50.0));
        // Approaching from the nest side: heading onto the marker agrees with outward.
        let mut ant = fx.ant_at(Vec2::new(0.0, 40.0), Vec2::X);
        fx.tick(&mut ant, 0.0);
        assert!((ant.velocity - Vec2::Y).length() < EPS);

        let mut side = fx.ant_at(Vec2::new(10.0, 50.0), Vec2::Y);
        fx.tick(&mut side, 0.0);
        assert!((side.velocity - Vec2::new(-1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn trail_behind_is_followed_outward_instead() {
        let mut fx = Fixture::new();
        fx.trails.deposit(Vec2::new(0.0, 50.0));
        // Beyond the marker: heading onto it points back at the nest.
        let mut ant = fx.ant_at(Vec2::new(0.0, 60.0), Vec2::X);
        fx.tick(&mut ant, 0.0);
        assert!((ant.velocity - Vec2::Y).length() < EPS);
    }

    #[test]
    fn lost_ant_heads_back_into_the_world() {
        let mut fx = Fixture::new();
        let start = Vec2::new(-5000.0, -5000.0);
        let mut ant = fx.ant_at(start, Vec2::new(-1.0, 0.0));
        fx.tick(&mut ant, 0.0);
        // Any point in the bounds lies up and to the right.
        assert!(ant.velocity.x > 0.0 && ant.velocity.y > 0.0);
        assert!((ant.velocity.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn idle_ant_near_home_keeps_heading() {
        let mut fx = Fixture::new();
        let heading = Vec2::new(0.6, 0.8);
        let mut ant = fx.ant_at(Vec2::new(50.0, 50.0), heading);
        fx.tick(&mut ant, 0.0);
        assert_eq!(ant.velocity, heading);
        assert_eq!(ant.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn snack_outranks_trail() {
        let mut fx = Fixture::new();
        fx.trails.deposit(Vec2::new(0.0, 52.0));
        fx.snacks.insert(Snack {
            pos: Vec2::new(10.0, 50.0),
            value: 1,
        });
        let ant = fx.ant_at(Vec2::new(0.0, 50.0), Vec2::X);
        assert!(matches!(
            ant.scan(&fx.snacks, &fx.trails),
            Sensed::Snack { index: 0, .. }
        ));
    }
}
