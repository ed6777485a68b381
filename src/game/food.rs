//! Food placement strategies
//!
//! The tick engine calls a [`FoodPlacer`] once for every snake that eats
//! during a tick, after that snake's head has already moved.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::cell::{EMPTY, FOOD};
use super::grid::Position;
use super::state::GameState;

/// Status reported by a food placer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodStatus {
    Placed(Position),
    /// No cell was available; the board simply has no food for now
    NoRoom,
}

/// Strategy that puts a new `*` somewhere on the board
pub trait FoodPlacer {
    fn place_food(&mut self, state: &mut GameState) -> FoodStatus;
}

impl<F> FoodPlacer for F
where
    F: FnMut(&mut GameState) -> FoodStatus,
{
    fn place_food(&mut self, state: &mut GameState) -> FoodStatus {
        self(state)
    }
}

/// Places food on a uniformly chosen empty cell
pub struct RandomFood {
    rng: StdRng,
}

impl RandomFood {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFood {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodPlacer for RandomFood {
    fn place_food(&mut self, state: &mut GameState) -> FoodStatus {
        let choices = state.empty_cells();
        let Some(&pos) = choices.choose(&mut self.rng) else {
            warn!("no empty cell left for food");
            return FoodStatus::NoRoom;
        };

        match state.grid.set_at(pos, FOOD) {
            Ok(()) => {
                debug!(x = pos.x, y = pos.y, "placed food");
                FoodStatus::Placed(pos)
            }
            Err(_) => FoodStatus::NoRoom,
        }
    }
}

/// Deterministic placer that always targets one cell
///
/// Only writes food when the cell is empty floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFood(pub Position);

impl FoodPlacer for FixedFood {
    fn place_food(&mut self, state: &mut GameState) -> FoodStatus {
        match state.grid.get_at(self.0) {
            Ok(EMPTY) => match state.grid.set_at(self.0, FOOD) {
                Ok(()) => FoodStatus::Placed(self.0),
                Err(_) => FoodStatus::NoRoom,
            },
            _ => FoodStatus::NoRoom,
        }
    }
}
