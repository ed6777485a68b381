//! Cell codec: what a single board character means
//!
//! Snakes are not stored as lists. A snake is a chain of directional
//! symbols starting at a tail (`w a s d`) and continuing through arrow
//! cells (`^ < > v`) until the last arrow, which is the head. Every
//! helper here is a pure function of one character.

use serde::{Deserialize, Serialize};

pub const WALL: char = '#';
pub const EMPTY: char = ' ';
pub const FOOD: char = '*';
pub const DEAD_HEAD: char = 'x';

/// Direction a segment points in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Arrow used for head and body segments
    pub fn head_symbol(&self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    /// Letter used for the tail segment
    pub fn tail_symbol(&self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Down => 's',
            Direction::Left => 'a',
            Direction::Right => 'd',
        }
    }

    /// Direction encoded by a head, body or tail symbol
    pub fn from_symbol(c: char) -> Option<Direction> {
        match c {
            '^' | 'w' => Some(Direction::Up),
            'v' | 's' => Some(Direction::Down),
            '<' | 'a' => Some(Direction::Left),
            '>' | 'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Classification of one board character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
    Food,
    /// Head or interior body segment
    Segment(Direction),
    Tail(Direction),
    DeadHead,
    /// Anything outside the known alphabet
    Other(char),
}

impl Cell {
    pub fn classify(c: char) -> Cell {
        match c {
            WALL => Cell::Wall,
            EMPTY => Cell::Empty,
            FOOD => Cell::Food,
            DEAD_HEAD => Cell::DeadHead,
            '^' => Cell::Segment(Direction::Up),
            'v' => Cell::Segment(Direction::Down),
            '<' => Cell::Segment(Direction::Left),
            '>' => Cell::Segment(Direction::Right),
            'w' => Cell::Tail(Direction::Up),
            's' => Cell::Tail(Direction::Down),
            'a' => Cell::Tail(Direction::Left),
            'd' => Cell::Tail(Direction::Right),
            other => Cell::Other(other),
        }
    }

    pub fn is_snake_part(&self) -> bool {
        matches!(self, Cell::Segment(_) | Cell::Tail(_) | Cell::DeadHead)
    }
}

/// Head-class symbol: a live head arrow or a dead head marker
pub fn is_head(c: char) -> bool {
    matches!(Cell::classify(c), Cell::Segment(_) | Cell::DeadHead)
}

pub fn is_tail_symbol(c: char) -> bool {
    matches!(Cell::classify(c), Cell::Tail(_))
}

/// Interior body segments share the arrow alphabet with live heads
pub fn is_body(c: char) -> bool {
    matches!(Cell::classify(c), Cell::Segment(_))
}

pub fn is_snake_part(c: char) -> bool {
    Cell::classify(c).is_snake_part()
}

pub fn is_wall(c: char) -> bool {
    c == WALL
}

pub fn is_food(c: char) -> bool {
    c == FOOD
}

/// Unit vector for a directional symbol, (0, 0) for everything else
pub fn direction_of(c: char) -> (i32, i32) {
    Direction::from_symbol(c).map_or((0, 0), |dir| dir.delta())
}

/// Tail letter for a head or body arrow; `None` when the input has no mapping
pub fn tail_symbol_for(c: char) -> Option<char> {
    match Cell::classify(c) {
        Cell::Segment(dir) => Some(dir.tail_symbol()),
        _ => None,
    }
}
