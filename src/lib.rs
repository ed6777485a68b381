//! Board Snake - a deterministic multi-snake grid simulation
//!
//! This library provides:
//! - Core game logic: cell codec, grid, snake registry and tick engine (game module)
//! - Plain-text board snapshots and snake reconstruction (board module)
//! - Session counters for the command-line runner (metrics module)

pub mod board;
pub mod game;
pub mod metrics;
