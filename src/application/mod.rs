mod engine;
mod viewport;

pub use engine::LifeEngine;
pub use viewport::ViewTransform;
