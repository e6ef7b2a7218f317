use std::ptr;

use log::{debug, info};

use super::mesh::{VertexArray, VertexBuffer, COMPONENTS_PER_VERTEX, TRIANGLE_VERTICES};
use super::shaders::{load_file, ShaderProgram};
use crate::config::DemoConfig;
use crate::utils::error::Result;

const POSITION_ATTRIBUTE: u32 = 0;

/// GL objects for the single triangle. Needs a current context.
pub struct TriangleScene {
    // Field order is drop order: the program and buffer go before the VAO.
    program: ShaderProgram,
    vertex_buffer: VertexBuffer,
    vertex_array: VertexArray,
    draw_calls: u32,
}

impl TriangleScene {
    pub fn new(config: &DemoConfig) -> Result<Self> {
        let [r, g, b, a] = config.clear_color;
        unsafe {
            gl::ClearColor(r, g, b, a);
        }

        let vertex_array = VertexArray::new();

        let fragment_source = load_file(&config.shaders.fragment)?;
        let vertex_source = load_file(&config.shaders.vertex)?;
        let program = ShaderProgram::compile_and_link(
            &fragment_source,
            &vertex_source,
            config.shaders.strict,
        )?;
        if program.report().is_clean() {
            info!("Shader program linked");
        }

        let vertex_buffer = VertexBuffer::upload(&TRIANGLE_VERTICES);
        debug!("Uploaded {} vertices", vertex_buffer.vertex_count());

        Ok(Self {
            program,
            vertex_buffer,
            vertex_array,
            draw_calls: 0,
        })
    }

    pub fn draw(&mut self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.program.bind();
        self.vertex_array.bind();

        unsafe {
            gl::EnableVertexAttribArray(POSITION_ATTRIBUTE);
        }
        self.vertex_buffer.bind();
        unsafe {
            gl::VertexAttribPointer(
                POSITION_ATTRIBUTE,
                COMPONENTS_PER_VERTEX as i32,
                gl::FLOAT,
                gl::FALSE,
                0,
                ptr::null(),
            );
            gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_buffer.vertex_count());
            gl::DisableVertexAttribArray(POSITION_ATTRIBUTE);
        }

        self.draw_calls += 1;
    }

    pub fn draw_calls(&self) -> u32 {
        self.draw_calls
    }
}
