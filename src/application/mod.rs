mod board;
mod simulation;
mod viewport;

pub use board::{BoardSize, SizeSource, DEFAULT_BOARD, parse_board_size, resolve_board_size};
pub use simulation::{MAX_UPDATES_PER_SECOND, MIN_ADJUSTED_UPDATES_PER_SECOND, RANDOM_PATTERN, Simulation, StartPattern};
pub use viewport::{Viewport, MIN_CELL_SIZE, MAX_CELL_SIZE, DEFAULT_CELL_SIZE};
