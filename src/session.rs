//! Game rules on top of the maze and pursuit core.
//!
//! A [`Session`] owns the level list and every piece of per-play state. It is
//! driven from outside: one [`Session::step`] per chaser move and one
//! [`Session::tick`] per second of countdown.

use tracing::{debug, info};

use crate::config::{GameConfig, Rules};
use crate::error::{GridError, SessionError};
use crate::grid::{Dir, Grid, Pos};
use crate::level::{build_levels, Level};
use crate::pursuit::{next_move, relocate};
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    TimeUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// Goal reached; waiting for [`Session::advance_level`].
    LevelCleared,
    GameOver(GameOverReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub reason: GameOverReason,
    /// The level reached beats every earlier game of this session.
    pub new_record: bool,
}

/// What a single chaser move led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The move would leave the grid; nothing changed.
    Blocked,
    /// The chaser moved; `target` is where the target ended up.
    Moved { target: Pos },
    /// The target was caught and respawned at `respawn`.
    Caught { respawn: Pos },
    LevelCleared,
    GameOver(GameOver),
}

pub struct Session {
    rules: Rules,
    levels: Vec<Level>,
    level: Level,
    level_number: u32,
    score: u32,
    goal: u32,
    time_left: u32,
    chaser: Pos,
    target: Pos,
    move_counter: u32,
    best_level: u32,
    status: Status,
}

impl Session {
    /// Builds the level list described by `config` and starts level 1.
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Result<Self, SessionError> {
        let levels = build_levels(
            config.total_levels,
            config.grid_width,
            config.grid_height,
            rng,
        )?;
        Self::from_levels(config.rules.clone(), levels, rng)
    }

    /// Starts level 1 on a prepared level list.
    pub fn from_levels(
        rules: Rules,
        levels: Vec<Level>,
        rng: &mut impl RandomSource,
    ) -> Result<Self, SessionError> {
        let first = levels.first().cloned().ok_or(GridError::NoLevels)?;
        let mut session = Self {
            chaser: first.start,
            target: first.start,
            level: first,
            levels,
            level_number: 1,
            score: 0,
            goal: rules.first_goal,
            time_left: rules.starting_time,
            move_counter: 0,
            best_level: 0,
            status: Status::Playing,
            rules,
        };
        session.restart(rng);
        Ok(session)
    }

    /// Back to level 1 with a fresh score and clock. The best level reached
    /// survives.
    pub fn restart(&mut self, rng: &mut impl RandomSource) {
        self.level_number = 1;
        self.score = 0;
        self.goal = self.rules.first_goal;
        self.move_counter = 0;
        self.time_left = self.rules.starting_time;
        self.enter_level(rng);
        self.status = Status::Playing;
    }

    /// Moves the chaser one tile.
    pub fn step(
        &mut self,
        dir: Dir,
        rng: &mut impl RandomSource,
    ) -> Result<StepOutcome, SessionError> {
        self.ensure_playing()?;

        let Some(next) = self.level.grid.neighbor(self.chaser, dir) else {
            return Ok(StepOutcome::Blocked);
        };
        if self.level.grid.is_wall(next) {
            return Ok(StepOutcome::GameOver(self.finish(GameOverReason::HitWall)));
        }
        self.chaser = next;

        if self.chaser == self.target {
            self.score += 1;
            self.time_left += self.rules.time_per_catch;
            if self.score >= self.goal {
                self.status = Status::LevelCleared;
                info!(level = self.level_number, score = self.score, "level cleared");
                return Ok(StepOutcome::LevelCleared);
            }
            self.target = relocate(&self.level.grid, self.chaser, rng);
            debug!(score = self.score, respawn = ?self.target, "target caught");
            return Ok(StepOutcome::Caught {
                respawn: self.target,
            });
        }

        self.move_counter += 1;
        if self.move_counter >= self.rules.target_move_every.max(1) {
            self.move_counter = 0;
            self.target = next_move(&self.level.grid, self.chaser, self.target);
        }
        Ok(StepOutcome::Moved {
            target: self.target,
        })
    }

    /// One second of countdown. Returns the game over when the clock runs out.
    pub fn tick(&mut self) -> Result<Option<GameOver>, SessionError> {
        self.ensure_playing()?;
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            return Ok(Some(self.finish(GameOverReason::TimeUp)));
        }
        Ok(None)
    }

    /// Moves on from a cleared level. The goal grows, the clock gets a bonus
    /// and the level list wraps around once exhausted.
    pub fn advance_level(&mut self, rng: &mut impl RandomSource) -> Result<(), SessionError> {
        if self.status != Status::LevelCleared {
            return Err(SessionError::NotCleared {
                status: self.status,
            });
        }
        self.level_number += 1;
        self.score = 0;
        self.goal += self.rules.goal_step;
        self.time_left += self.rules.time_per_level;
        self.enter_level(rng);
        self.status = Status::Playing;
        info!(
            level = self.level_number,
            goal = self.goal,
            time_left = self.time_left,
            "level started"
        );
        Ok(())
    }

    /// Level select. Loads level `number` with a fresh score and the goal that
    /// level would have had; the clock is left alone. Numbers below 1 load
    /// level 1.
    pub fn jump_to(&mut self, number: u32, rng: &mut impl RandomSource) {
        let number = number.max(1);
        self.level_number = number;
        self.score = 0;
        self.goal = self
            .rules
            .first_goal
            .saturating_add(self.rules.goal_step.saturating_mul(number - 1));
        self.enter_level(rng);
        self.status = Status::Playing;
    }

    pub fn grid(&self) -> &Grid {
        &self.level.grid
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn chaser(&self) -> Pos {
        self.chaser
    }

    pub fn target(&self) -> Pos {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn best_level(&self) -> u32 {
        self.best_level
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn enter_level(&mut self, rng: &mut impl RandomSource) {
        let index = (self.level_number as usize - 1) % self.levels.len();
        self.level = self.levels[index].clone();
        self.chaser = self.level.start;
        self.target = relocate(&self.level.grid, self.chaser, rng);
        debug!(
            level = self.level_number,
            index,
            chaser = ?self.chaser,
            target = ?self.target,
            "level loaded"
        );
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        if self.status == Status::Playing {
            Ok(())
        } else {
            Err(SessionError::NotPlaying {
                status: self.status,
            })
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> GameOver {
        self.status = Status::GameOver(reason);
        let new_record = self.level_number > self.best_level;
        if new_record {
            self.best_level = self.level_number;
        }
        info!(
            ?reason,
            level = self.level_number,
            new_record,
            "game over"
        );
        GameOver { reason, new_record }
    }
}
