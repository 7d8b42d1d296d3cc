pub mod types;

pub use types::CanvasError;
