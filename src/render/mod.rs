pub mod context;
pub mod mesh;
pub mod scene;
pub mod shaders;

pub use context::GlWindowContext;
pub use mesh::{VertexArray, VertexBuffer, TRIANGLE_VERTICES};
pub use scene::TriangleScene;
pub use shaders::{load_file, LinkReport, ShaderProgram};
