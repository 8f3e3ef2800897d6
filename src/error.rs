use thiserror::Error;

/// Errors surfaced by the engine command surface.
/// All are local, synchronous and non-retryable; the caller decides
/// user-visible behavior.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid dimensions must both be at least 1.
    #[error("invalid grid size {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    /// Operation attempted before create() or after destroy().
    #[error("engine is not initialized")]
    NotInitialized,

    /// Render target dimensions disagree with the grid.
    #[error("pixel buffer is {actual:?} but grid is {expected:?}")]
    SizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
