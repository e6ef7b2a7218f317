pub mod error;

pub use error::{DemoError, ShaderError, ShaderStage};
