use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ant::AntState;
use crate::colony::{Colony, Nest};
use crate::snack::Snack;
use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntView {
    pub pos: Vec2,
    pub heading: Vec2,
    pub state: AntState,
}

/// Point-in-time copy of everything visible in the colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonySnapshot {
    pub tick: u64,
    pub elapsed: f64,
    pub fps: f32,
    pub delivered: u64,
    pub nest: Nest,
    pub ants: Vec<AntView>,
    pub snacks: Vec<Snack>,
    pub trails: Vec<Trail>,
}

impl ColonySnapshot {
    pub fn capture<R>(colony: &Colony<R>) -> Self
    where
        R: crate::random::RandomSource,
    {
        Self {
            tick: colony.ticks(),
            elapsed: colony.elapsed(),
            fps: colony.fps(),
            delivered: colony.delivered(),
            nest: *colony.nest(),
            ants: colony
                .ants()
                .iter()
                .map(|ant| AntView {
                    pos: ant.pos,
                    heading: ant.velocity,
                    state: ant.state,
                })
                .collect(),
            snacks: colony.snacks().iter().copied().collect(),
            trails: colony.trails().iter().copied().collect(),
        }
    }

    pub fn carrying(&self) -> usize {
        self.ants
            .iter()
            .filter(|ant| ant.state == AntState::Carrying)
            .count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::ColonyConfig;

    #[test]
    fn snapshot_survives_json() {
        let config = ColonyConfig {
            ant_count: 3,
            snack_target: 2,
            ..ColonyConfig::default()
        };
        let mut colony = Colony::new(config, StdRng::seed_from_u64(4)).unwrap();
        colony.advance(0.1).unwrap();
        let snapshot = colony.snapshot();
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.ants.len(), 3);
        let carrying = colony.ants().iter().filter(|ant| ant.is_carrying()).count();
        assert_eq!(snapshot.carrying(), carrying);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"Searching\"") || json.contains("\"Carrying\""));
        assert_eq!(ColonySnapshot::from_json(&json).unwrap(), snapshot);
    }
}
