//! Formicary core engine: platform-agnostic ant colony foraging with decaying scent trails.

pub mod ant;
pub mod clock;
pub mod colony;
pub mod config;
pub mod error;
pub mod geometry;
pub mod random;
pub mod render;
pub mod snack;
pub mod snapshot;
pub mod trail;

pub use ant::{Ant, AntEvent, AntState, Sensed, Surroundings};
pub use clock::FrameRate;
pub use colony::{Colony, Nest, TickSummary};
pub use config::{ColonyConfig, WorldBounds};
pub use error::{ConfigError, SimulationError};
pub use geometry::{random_position, random_unit, Vec2Ext};
pub use random::RandomSource;
pub use render::{Footprint, RenderClass, RenderInstance, Renderable, BACKGROUND_RGB};
pub use snack::{Snack, SnackRegistry};
pub use snapshot::{AntView, ColonySnapshot};
pub use trail::{Trail, TrailRegistry};

pub use glam::Vec2;
