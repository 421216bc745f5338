use std::time::Duration;

use thiserror::Error;

use crate::geometry::Grid;
use crate::{Coords, GridInt};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a {width}x{height} board leaves fewer than two playable cells")]
    BoardTooSmall { width: GridInt, height: GridInt },
    #[error("start position {0:?} is not inside the border")]
    StartOutOfBounds(Coords),
    #[error("moves per second must be positive")]
    ZeroSpeed,
    #[error("frame interval must be positive")]
    ZeroFrameInterval,
}

/// Game configuration. The defaults are the classic 20x20 game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width, border included
    pub width: GridInt,
    /// Board height, border included
    pub height: GridInt,
    pub start: Coords,
    /// How many cells the snake advances per second
    pub moves_per_second: u32,
    /// How often the board is redrawn
    pub frame_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 20,
            height: 20,
            start: (13, 15),
            moves_per_second: 5,
            frame_interval: Duration::from_millis(100),
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn move_interval(&self) -> Duration {
        Duration::from_secs(1) / self.moves_per_second.max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.grid();
        if self.width < 3 || self.height < 3 || grid.interior_len() < 2 {
            return Err(ConfigError::BoardTooSmall { width: self.width, height: self.height });
        }
        if grid.is_wall(self.start) {
            return Err(ConfigError::StartOutOfBounds(self.start));
        }
        if self.moves_per_second == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }
}
