//! Core simulation: board cells, snakes and the tick engine
//!
//! This module has no file I/O. Boards come from [`GameState::default_state`],
//! [`GameState::from_config`] or the `board` module's loader.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use cell::{Cell, Direction};
pub use config::GameConfig;
pub use engine::{CollisionType, SnakeOutcome, TickReport, update_state};
pub use error::{GameError, Result};
pub use food::{FixedFood, FoodPlacer, FoodStatus, RandomFood};
pub use grid::{Grid, Position};
pub use state::{GameState, Snake};
