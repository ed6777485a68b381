//! Plain-text board snapshots
//!
//! The format is the board itself: one line per row, every line the same
//! width, each terminated by `\n`. There is no header.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::info;

use crate::game::{GameError, GameState, Grid, Result};

/// Write every row followed by `\n`
pub fn write_board<W: Write>(state: &GameState, mut writer: W) -> std::io::Result<()> {
    for row in state.grid.rows() {
        writer.write_all(row.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

pub fn board_to_string(state: &GameState) -> String {
    let mut out = String::with_capacity((state.grid.width() + 1) * state.grid.height());
    for row in state.grid.rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

pub fn save_board(state: &GameState, path: &Path) -> Result<()> {
    let io_err = |source: std::io::Error| GameError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    write_board(state, BufWriter::new(file)).map_err(io_err)?;

    info!(
        path = %path.display(),
        width = state.grid.width(),
        height = state.grid.height(),
        "saved board"
    );
    Ok(())
}

/// Parse board text into a grid
///
/// Rows are split on `\n`; a trailing `\r` on a row is dropped and a last
/// row without a terminator is still a row. `source_name` only labels errors.
pub fn parse_grid(text: &str, source_name: &str) -> Result<Grid> {
    let malformed = |reason: String| GameError::MalformedBoard {
        source_name: source_name.to_string(),
        reason,
    };

    let body = text.strip_suffix('\n').unwrap_or(text);
    if body.is_empty() {
        return Err(malformed("board has no rows".to_string()));
    }

    let rows: Vec<Vec<char>> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
        .collect();

    let width = rows[0].len();
    if width == 0 {
        return Err(malformed("first row is empty".to_string()));
    }

    if let Some((line, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != width)
    {
        return Err(malformed(format!(
            "row {} has width {}, expected {}",
            line + 1,
            row.len(),
            width
        )));
    }

    Ok(Grid::from_rows(width, &rows))
}

/// Parse board text and rebuild the snake registry from it
pub fn parse_board(text: &str, source_name: &str) -> Result<GameState> {
    let grid = parse_grid(text, source_name)?;
    let mut state = GameState::new(grid, Vec::new());
    super::initialize_snakes(&mut state)?;
    Ok(state)
}

pub fn load_board(path: &Path) -> Result<GameState> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => GameError::MalformedBoard {
            source_name: path.display().to_string(),
            reason: "board is not valid UTF-8".to_string(),
        },
        _ => GameError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let state = parse_board(&text, &path.display().to_string())?;
    info!(
        path = %path.display(),
        width = state.grid.width(),
        height = state.grid.height(),
        snakes = state.num_snakes(),
        "loaded board"
    );
    Ok(state)
}
