// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Engine facade and view math
pub mod application;

// Infrastructure layer - pixel encoding and input
pub mod rendering;
pub mod input;

mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Simulator, Transition, presets};
pub use application::{LifeEngine, ViewTransform};
pub use rendering::{PixelBuffer, RenderSettings};
pub use error::EngineError;
