pub mod core;
pub mod rendering;

pub use self::core::{DemoConfig, CONFIG_FILE};
pub use rendering::{ContextConfig, ProfileKind, ShaderConfig, WindowConfig};
