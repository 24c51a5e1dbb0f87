// Domain layer - Cells, generations, rules, patterns
pub mod domain;

// Application layer - Simulation state, viewport, board size
pub mod application;

// Configuration, errors and logging
pub mod config;
pub mod error;
pub mod logging;

// Infrastructure layer - terminal, rendering, input
pub mod terminal;
pub mod rendering;
#[cfg(feature = "graphics")]
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Generation, Pattern, Rule, presets, transition};
pub use application::{BoardSize, Simulation, StartPattern, Viewport};
pub use error::{LifeError, LifeResult};
