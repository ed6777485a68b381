use serde::{Deserialize, Serialize};

use super::cell::{Direction, EMPTY};
use super::error::{GameError, Result};

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Owned rectangular character buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid with every cell set to empty floor
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, EMPTY)
    }

    pub fn filled(width: usize, height: usize, ch: char) -> Self {
        Self {
            width,
            height,
            cells: vec![ch; width * height],
        }
    }

    /// Build a grid from rows that all have exactly `width` characters
    pub(crate) fn from_rows(width: usize, rows: &[Vec<char>]) -> Self {
        let cells = rows.iter().flatten().copied().collect();
        Self {
            width,
            height: rows.len(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.x, pos.y)
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(GameError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<char> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, ch: char) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    pub fn get_at(&self, pos: Position) -> Result<char> {
        self.get(pos.x, pos.y)
    }

    pub fn set_at(&mut self, pos: Position, ch: char) -> Result<()> {
        self.set(pos.x, pos.y, ch)
    }

    /// Row strings without line terminators, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect())
    }

    /// Every position holding `ch`, in row-major order
    pub fn positions_of(&self, ch: char) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == ch)
            .map(|(i, _)| Position::new((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }
}
