use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::Grid;
use super::obstacles::ObstacleSet;
use super::types::{RequestPolicy, ReversalRule, TurnRules};

pub const DEFAULT_GRID_WIDTH: u32 = 32;
pub const DEFAULT_GRID_HEIGHT: u32 = 24;
pub const DEFAULT_TICKS_PER_SECOND: u32 = 15;

const MIN_GRID_SIDE: u32 = 4;
const MAX_GRID_SIDE: u32 = 200;
const MAX_TICKS_PER_SECOND: u32 = 60;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameSettings {
    pub grid_width: u32,
    pub grid_height: u32,
    pub ticks_per_second: u32,
    pub obstacles_enabled: bool,
    pub reversal_rule: ReversalRule,
    pub request_policy: RequestPolicy,
    pub seed: Option<u64>,
}

impl GameSettings {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width as usize, self.grid_height as usize)
    }

    pub fn turn_rules(&self) -> TurnRules {
        TurnRules {
            reversal: self.reversal_rule,
            requests: self.request_policy,
        }
    }

    pub fn obstacle_count(&self) -> usize {
        if self.obstacles_enabled {
            ObstacleSet::count_for(&self.grid())
        } else {
            0
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&self.grid_width) {
            return Err(format!(
                "grid_width must be between {} and {}",
                MIN_GRID_SIDE, MAX_GRID_SIDE
            ));
        }
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&self.grid_height) {
            return Err(format!(
                "grid_height must be between {} and {}",
                MIN_GRID_SIDE, MAX_GRID_SIDE
            ));
        }
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(format!(
                "ticks_per_second must be between 1 and {}",
                MAX_TICKS_PER_SECOND
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            obstacles_enabled: true,
            reversal_rule: ReversalRule::Reject,
            request_policy: RequestPolicy::LatestWins,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.obstacle_count(), 7);
        assert_eq!(settings.tick_interval(), Duration::from_secs(1) / 15);
    }

    #[test]
    fn test_rejects_out_of_range_dimensions() {
        let narrow = GameSettings {
            grid_width: 3,
            ..GameSettings::default()
        };
        assert!(narrow.validate().is_err());

        let tall = GameSettings {
            grid_height: 201,
            ..GameSettings::default()
        };
        assert!(tall.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let settings = GameSettings {
            ticks_per_second: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_smallest_grids_leave_room_for_snake_and_food() {
        for (width, height) in [
            (MIN_GRID_SIDE, MIN_GRID_SIDE),
            (MIN_GRID_SIDE, MAX_GRID_SIDE),
            (MAX_GRID_SIDE, MAX_GRID_SIDE),
        ] {
            let settings = GameSettings {
                grid_width: width,
                grid_height: height,
                ..GameSettings::default()
            };
            assert!(settings.validate().is_ok());
            assert!(settings.obstacle_count() + 2 < settings.grid().cell_count());
        }
    }

    #[test]
    fn test_disabled_obstacles_have_zero_count() {
        let settings = GameSettings {
            obstacles_enabled: false,
            ..GameSettings::default()
        };
        assert_eq!(settings.obstacle_count(), 0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let serializer = YamlConfigSerializer::new();
        let parsed: GameSettings = serializer
            .deserialize("grid_width: 40\nreversal_rule: allow\n")
            .unwrap();
        assert_eq!(parsed.grid_width, 40);
        assert_eq!(parsed.grid_height, DEFAULT_GRID_HEIGHT);
        assert_eq!(parsed.reversal_rule, ReversalRule::Allow);
        assert_eq!(parsed.request_policy, RequestPolicy::LatestWins);
    }
}
