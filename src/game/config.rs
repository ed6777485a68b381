use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cell::Direction;
use super::error::{GameError, Result};
use super::grid::Position;

/// Configuration for the default-state generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the board, walls included
    pub board_width: usize,
    /// Height of the board, walls included
    pub board_height: usize,
    /// Head of the single starting snake
    pub snake_head: Position,
    /// Facing of the starting snake; the tail sits one cell behind the head
    pub snake_direction: Direction,
    /// Starting food cell
    pub food: Position,
    /// Seed for random food placement, entropy when absent
    #[serde(default)]
    pub food_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 14,
            board_height: 10,
            snake_head: Position::new(5, 4),
            snake_direction: Direction::Right,
            food: Position::new(9, 2),
            food_seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Tail position implied by the head and facing
    pub fn snake_tail(&self) -> Position {
        self.snake_head.moved_in_direction(self.snake_direction.opposite())
    }

    /// Validate configuration parameters
    ///
    /// `Ok(())` if the starting layout fits inside the wall border,
    /// `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.board_width < 3 || self.board_height < 3 {
            return Err(format!(
                "board must be at least 3x3, got {}x{}",
                self.board_width, self.board_height
            ));
        }

        let interior = |pos: Position| {
            pos.x >= 1
                && pos.y >= 1
                && (pos.x as usize) < self.board_width - 1
                && (pos.y as usize) < self.board_height - 1
        };

        if !interior(self.snake_head) {
            return Err(format!(
                "snake_head {:?} must be inside the walls",
                self.snake_head
            ));
        }

        let tail = self.snake_tail();
        if !interior(tail) {
            return Err(format!("snake tail {:?} must be inside the walls", tail));
        }

        if !interior(self.food) {
            return Err(format!("food {:?} must be inside the walls", self.food));
        }

        if self.food == self.snake_head || self.food == tail {
            return Err(format!("food {:?} overlaps the snake", self.food));
        }

        Ok(())
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|e| GameError::InvalidConfig {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| GameError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| io_err(e.into()))?;
        std::fs::write(path, json).map_err(io_err)
    }
}
