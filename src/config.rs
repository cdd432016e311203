//! Game configuration and rule constants.
use std::env;

const DEFAULT_GRID_W: usize = 20;
const DEFAULT_GRID_H: usize = 20;
const DEFAULT_TOTAL_LEVELS: usize = 20;
const DEFAULT_PREVIEW_LEVEL: usize = 3;
const MIN_CONFIG_SIDE: usize = 5;

/// Settings for building a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub total_levels: usize,
    /// Fixed seed for reproducible level sets. `None` draws from the OS.
    pub seed: Option<u64>,
    /// 1-based level the preview binary prints.
    pub preview_level: usize,
    pub rules: Rules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_W,
            grid_height: DEFAULT_GRID_H,
            total_levels: DEFAULT_TOTAL_LEVELS,
            seed: None,
            preview_level: DEFAULT_PREVIEW_LEVEL,
            rules: Rules::default(),
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SERPENT_GRID_WIDTH` - Grid width in tiles (default: 20, minimum 5)
    /// - `SERPENT_GRID_HEIGHT` - Grid height in tiles (default: 20, minimum 5)
    /// - `SERPENT_TOTAL_LEVELS` - Levels built per session (default: 20)
    /// - `SERPENT_SEED` - Seed for level generation (default: random)
    /// - `SERPENT_PREVIEW_LEVEL` - Level printed by the preview binary (default: 3)
    ///
    /// Unparsable or zero values keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(w) = read_positive("SERPENT_GRID_WIDTH") {
            config.grid_width = w.max(MIN_CONFIG_SIDE);
        }
        if let Some(h) = read_positive("SERPENT_GRID_HEIGHT") {
            config.grid_height = h.max(MIN_CONFIG_SIDE);
        }
        if let Some(n) = read_positive("SERPENT_TOTAL_LEVELS") {
            config.total_levels = n;
        }
        config.seed = read_env::<u64>("SERPENT_SEED");
        if let Some(level) = read_positive("SERPENT_PREVIEW_LEVEL") {
            config.preview_level = level;
        }

        config
    }
}

/// Scoring and timing rules of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Seconds on the clock when level 1 starts.
    pub starting_time: u32,
    /// Seconds added for every catch.
    pub time_per_catch: u32,
    /// Seconds added when moving on to the next level.
    pub time_per_level: u32,
    /// Catches needed to clear level 1.
    pub first_goal: u32,
    /// Extra catches needed for each following level.
    pub goal_step: u32,
    /// The target reacts once every this many chaser moves.
    pub target_move_every: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_time: 20,
            time_per_catch: 8,
            time_per_level: 20,
            first_goal: 5,
            goal_step: 2,
            target_move_every: 3,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_positive(key: &str) -> Option<usize> {
    read_env::<usize>(key).filter(|v| *v > 0)
}
