//! The colony: nest, ants, snacks and trails advanced together one tick at a time.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ant::{Ant, AntEvent, Surroundings};
use crate::clock::FrameRate;
use crate::config::ColonyConfig;
use crate::error::{ConfigError, SimulationError};
use crate::geometry::{random_position, random_unit};
use crate::random::RandomSource;
use crate::render::{Footprint, RenderInstance, Renderable};
use crate::snack::SnackRegistry;
use crate::snapshot::ColonySnapshot;
use crate::trail::TrailRegistry;

/// Home base. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nest {
    pub pos: Vec2,
    pub size: f32,
}

/// Tallies from a single [`Colony::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    pub pickups: usize,
    pub deliveries: usize,
    pub trails_laid: usize,
    pub trails_expired: usize,
    pub snacks_depleted: usize,
    pub snacks_spawned: usize,
}

impl TickSummary {
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

pub struct Colony<R> {
    config: ColonyConfig,
    nest: Nest,
    ants: Vec<Ant>,
    snacks: SnackRegistry,
    trails: TrailRegistry,
    rng: R,
    frame_rate: FrameRate,
    elapsed: f64,
    ticks: u64,
    delivered: u64,
}

impl Colony<StdRng> {
    /// Populated colony seeded from `config.seed`, or from entropy when unset.
    pub fn from_config(config: ColonyConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: RandomSource> Colony<R> {
    /// Validated colony with every ant at the nest and the snack population at target.
    pub fn new(config: ColonyConfig, rng: R) -> Result<Self, ConfigError> {
        let mut colony = Self::empty(config, rng)?;
        let nest = colony.nest.pos;
        for _ in 0..colony.config.ant_count {
            colony.spawn_ant_at(nest);
        }
        let bounds = colony.config.world;
        for _ in 0..colony.config.snack_target {
            let pos = random_position(&mut colony.rng, bounds);
            colony.snacks.spawn_at(pos, &mut colony.rng);
        }
        debug!(
            ants = colony.ants.len(),
            snacks = colony.snacks.len(),
            nest_x = nest.x,
            nest_y = nest.y,
            "colony created"
        );
        Ok(colony)
    }

    /// Validated colony holding only the nest.
    pub fn empty(config: ColonyConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let nest = Nest {
            pos: config.nest_position(),
            size: config.nest_size,
        };
        Ok(Self {
            snacks: SnackRegistry::new(config.snack_max_value),
            trails: TrailRegistry::new(nest.pos, config.trail_lifetime),
            ants: Vec::with_capacity(config.ant_count as usize),
            nest,
            config,
            rng,
            frame_rate: FrameRate::default(),
            elapsed: 0.0,
            ticks: 0,
            delivered: 0,
        })
    }

    /// Add a searching ant at `pos` with a random heading.
    pub fn spawn_ant_at(&mut self, pos: Vec2) -> &mut Ant {
        let heading = random_unit(&mut self.rng);
        self.ants.push(Ant::new(pos, heading, &self.config));
        let last = self.ants.len() - 1;
        &mut self.ants[last]
    }

    /// Run one full tick: ants, trail decay, snack cull and top-up, trail cull.
    ///
    /// Ants update in order, so a trail laid or a snack drained by one ant is
    /// already visible to the ants after it. A zero `dt` moves nothing and
    /// ages nothing, but ants still sense and decide.
    pub fn advance(&mut self, dt: f32) -> Result<TickSummary, SimulationError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }
        let mut summary = TickSummary::default();

        let mut world = Surroundings {
            nest: self.nest.pos,
            snacks: &mut self.snacks,
            trails: &mut self.trails,
            rng: &mut self.rng,
            config: &self.config,
        };
        for ant in &mut self.ants {
            match ant.update(dt, &mut world) {
                Some(AntEvent::PickedUp) => summary.pickups += 1,
                Some(AntEvent::Delivered) => summary.deliveries += 1,
                Some(AntEvent::LaidTrail) => summary.trails_laid += 1,
                None => {}
            }
        }

        self.trails.tick(dt);
        summary.snacks_depleted = self.snacks.cull();
        let bounds = self.config.world;
        let target = self.config.snack_target as usize;
        if self
            .snacks
            .replenish(target, &mut self.rng, |rng| random_position(rng, bounds))
            .is_some()
        {
            summary.snacks_spawned = 1;
        }
        summary.trails_expired = self.trails.cull();

        self.frame_rate.record(dt);
        self.elapsed += f64::from(dt);
        self.ticks += 1;
        self.delivered += summary.deliveries as u64;

        if !summary.is_quiet() {
            debug!(tick = self.ticks, ?summary, "tick");
        }
        Ok(summary)
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    pub fn nest(&self) -> &Nest {
        &self.nest
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn snacks(&self) -> &SnackRegistry {
        &self.snacks
    }

    pub fn snacks_mut(&mut self) -> &mut SnackRegistry {
        &mut self.snacks
    }

    pub fn trails(&self) -> &TrailRegistry {
        &self.trails
    }

    pub fn trails_mut(&mut self) -> &mut TrailRegistry {
        &mut self.trails
    }

    /// Simulated time so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Snacks brought back to the nest since the start.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn fps(&self) -> f32 {
        self.frame_rate.fps()
    }

    /// Draw list: nest, then trails, snacks and ants on top.
    pub fn render_instances(&self) -> Vec<RenderInstance> {
        let mut instances =
            Vec::with_capacity(1 + self.trails.len() + self.snacks.len() + self.ants.len());
        instances.push(self.nest.instance());
        instances.extend(self.trails.iter().map(|trail| {
            Footprint {
                entity: trail,
                size: self.config.trail_size,
            }
            .instance()
        }));
        instances.extend(self.snacks.iter().map(|snack| {
            Footprint {
                entity: snack,
                size: self.config.snack_size,
            }
            .instance()
        }));
        instances.extend(self.ants.iter().map(|ant| ant.instance()));
        instances
    }

    pub fn snapshot(&self) -> ColonySnapshot {
        ColonySnapshot::capture(self)
    }
}
