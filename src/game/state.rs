use super::cell::{self, Cell, DEAD_HEAD, FOOD, WALL};
use super::config::GameConfig;
use super::error::{GameError, Result};
use super::grid::{Grid, Position};

/// One snake in the registry
///
/// The body is never stored: it is the chain of directional symbols on the
/// grid from `tail` to `head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub head: Position,
    pub tail: Position,
    pub live: bool,
}

impl Snake {
    pub fn new(tail: Position, head: Position) -> Self {
        Self {
            head,
            tail,
            live: true,
        }
    }
}

/// Layout produced by `GameConfig::default()`
pub const DEFAULT_BOARD: [&str; 10] = [
    "##############",
    "#            #",
    "#        *   #",
    "#            #",
    "#   d>       #",
    "#            #",
    "#            #",
    "#            #",
    "#            #",
    "##############",
];

/// Board plus snake registry
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snakes: Vec<Snake>,
}

impl GameState {
    pub fn new(grid: Grid, snakes: Vec<Snake>) -> Self {
        Self { grid, snakes }
    }

    /// The canonical new-game board: a 14x10 walled rectangle with one
    /// snake facing right and one food cell
    pub fn default_state() -> Self {
        let rows: Vec<Vec<char>> = DEFAULT_BOARD.iter().map(|row| row.chars().collect()).collect();
        let grid = Grid::from_rows(DEFAULT_BOARD[0].len(), &rows);
        Self::new(grid, vec![Snake::new(Position::new(4, 4), Position::new(5, 4))])
    }

    /// Build a walled board with the single snake and food described by `config`
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| GameError::InvalidConfig {
                source_name: "<config>".to_string(),
                reason,
            })?;

        let (width, height) = (config.board_width, config.board_height);
        let mut grid = Grid::new(width, height);
        for x in 0..width as i32 {
            grid.set(x, 0, WALL)?;
            grid.set(x, height as i32 - 1, WALL)?;
        }
        for y in 1..height as i32 - 1 {
            grid.set(0, y, WALL)?;
            grid.set(width as i32 - 1, y, WALL)?;
        }

        let tail = config.snake_tail();
        grid.set_at(config.food, FOOD)?;
        grid.set_at(tail, config.snake_direction.tail_symbol())?;
        grid.set_at(config.snake_head, config.snake_direction.head_symbol())?;

        Ok(Self::new(grid, vec![Snake::new(tail, config.snake_head)]))
    }

    pub fn num_snakes(&self) -> usize {
        self.snakes.len()
    }

    pub fn live_snakes(&self) -> usize {
        self.snakes.iter().filter(|s| s.live).count()
    }

    /// Cells of snake `index` from tail to head, following direction symbols
    pub fn snake_chain(&self, index: usize) -> Result<Vec<Position>> {
        let Some(snake) = self.snakes.get(index) else {
            return Ok(Vec::new());
        };

        let mut chain = vec![snake.tail];
        let mut pos = snake.tail;
        while pos != snake.head {
            let symbol = self.grid.get_at(pos)?;
            let (dx, dy) = cell::direction_of(symbol);
            let next = pos.moved_by(dx, dy);
            if (dx, dy) == (0, 0) || chain.len() > self.grid.width() * self.grid.height() {
                return Err(GameError::BrokenChain {
                    x: pos.x,
                    y: pos.y,
                    symbol,
                });
            }
            chain.push(next);
            pos = next;
        }
        Ok(chain)
    }

    /// Positions of every dead head marker on the board
    pub fn dead_heads(&self) -> Vec<Position> {
        self.grid.positions_of(DEAD_HEAD)
    }

    /// Positions of every empty floor cell, row-major
    pub fn empty_cells(&self) -> Vec<Position> {
        self.grid.positions_of(cell::EMPTY)
    }

    pub(crate) fn classify(&self, pos: Position) -> Result<Cell> {
        Ok(Cell::classify(self.grid.get_at(pos)?))
    }
}
