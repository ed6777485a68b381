//! Board snapshots and snake reconstruction
//!
//! Snapshots carry no snake list, so loading a board always rebuilds the
//! registry from tail symbols with [`initialize_snakes`].

pub mod io;
pub mod snakes;

pub use io::{board_to_string, load_board, parse_board, parse_grid, save_board, write_board};
pub use snakes::initialize_snakes;
