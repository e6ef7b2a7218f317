pub mod app;
pub mod config;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use app::{run, Presentation};
pub use config::{DemoConfig, CONFIG_FILE};
pub use render::{GlWindowContext, ShaderProgram, TriangleScene, TRIANGLE_VERTICES};
pub use utils::error::{DemoError, ShaderError};
