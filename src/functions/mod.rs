// Functions are organized by categories
pub mod cross_multiply;
pub mod display;
pub mod presets;

// Re-export all function implementations
pub use cross_multiply::*;
pub use display::*;
pub use presets::*;
