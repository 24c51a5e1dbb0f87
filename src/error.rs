use thiserror::Error;

/// Failures surfaced while configuring a simulation.
/// The engine itself has no failure modes; only startup can go wrong.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LifeError {
    /// Requested pattern name is not in the library
    #[error("unknown pattern '{0}' (run with --extended-help to list patterns)")]
    UnknownPattern(String),

    /// Requested rule name is not known
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// Graphical mode requested but this build has no graphical renderer
    #[error("graphical renderer unavailable: rebuild with the `graphics` feature")]
    RendererUnavailable,

    /// Piped board size could not be read as two positive integers.
    /// Recovered by falling back to the detected or default size.
    #[error("malformed board size input: {0:?}")]
    MalformedBoardSizeInput(String),
}

pub type LifeResult<T> = Result<T, LifeError>;
