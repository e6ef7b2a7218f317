use std::ffi::NulError;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage a shader object was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to read shader file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Null byte error: {0}")]
    Nul(#[from] NulError),
    #[error("{stage} shader compilation failed: {log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("Program linking failed: {0}")]
    Linking(String),
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unable to create window: {0}")]
    Window(String),
    #[error("Unable to create OpenGL context: {0}")]
    Context(String),
    #[error("Unable to create window surface: {0}")]
    Surface(String),
    #[error("Unable to present frame: {0}")]
    Present(String),
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, DemoError>;
