use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub centered: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "SDL2 Window".to_string(),
            width: 1280,
            height: 720,
            centered: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Core,
    Compatibility,
}

/// OpenGL version and profile requested from the driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContextConfig {
    pub major: u8,
    pub minor: u8,
    pub profile: ProfileKind,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 0,
            profile: ProfileKind::Core,
        }
    }
}

impl ContextConfig {
    /// Core profiles only exist from OpenGL 3.2 on.
    pub fn supports_profile(&self) -> bool {
        match self.profile {
            ProfileKind::Core => (self.major, self.minor) >= (3, 2),
            ProfileKind::Compatibility => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShaderConfig {
    pub fragment: PathBuf,
    pub vertex: PathBuf,
    /// Fail on compile or link errors instead of logging and carrying on.
    pub strict: bool,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            fragment: PathBuf::from("shaders/triangle.frag"),
            vertex: PathBuf::from("shaders/triangle.vert"),
            strict: false,
        }
    }
}
