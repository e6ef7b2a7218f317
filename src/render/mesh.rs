use gl::types::*;

/// Three 3-component positions: bottom left, bottom right, top centre.
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -1.0, -1.0, 0.0, //
    1.0, -1.0, 0.0, //
    0.0, 1.0, 0.0,
];

pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Byte image handed to `glBufferData`.
pub fn vertex_bytes(vertices: &[f32]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    /// Generates and binds a VAO. Core profiles refuse attribute setup
    /// without one.
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
            gl::BindVertexArray(id);
        }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}

pub struct VertexBuffer {
    id: GLuint,
    vertex_count: GLsizei,
}

impl VertexBuffer {
    /// Uploads tightly packed positions as `STATIC_DRAW`.
    pub fn upload(vertices: &[f32]) -> Self {
        let bytes = vertex_bytes(vertices);
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }

        Self {
            id,
            vertex_count: (vertices.len() / COMPONENTS_PER_VERTEX) as GLsizei,
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) };
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}
