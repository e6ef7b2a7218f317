// shaders.rs - GLSL loading, compilation and linking

use std::ffi::CString;
use std::path::Path;
use std::ptr;

use gl::types::*;
use log::{debug, warn};

use crate::utils::error::{ShaderError, ShaderStage};

/// Reads a whole shader source file as text.
pub fn load_file(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// What the driver said while building a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub fragment_compiled: bool,
    pub vertex_compiled: bool,
    pub linked: bool,
    pub diagnostics: Vec<String>,
}

impl LinkReport {
    pub fn is_clean(&self) -> bool {
        self.fragment_compiled && self.vertex_compiled && self.linked && self.diagnostics.is_empty()
    }
}

pub struct ShaderProgram {
    id: GLuint,
    report: LinkReport,
}

impl ShaderProgram {
    /// Compiles both stages and links them.
    ///
    /// Driver diagnostics are logged. Unless `strict` is set, the program is
    /// returned even when compilation or linking failed, and using it draws
    /// nothing.
    pub fn compile_and_link(
        fragment_source: &str,
        vertex_source: &str,
        strict: bool,
    ) -> Result<Self, ShaderError> {
        // Reject bad input before touching the driver.
        let fragment_cstring = CString::new(fragment_source.as_bytes())?;
        let vertex_cstring = CString::new(vertex_source.as_bytes())?;

        let mut report = LinkReport::default();

        let fragment_shader = compile_stage(&fragment_cstring, ShaderStage::Fragment, &mut report);
        let vertex_shader = compile_stage(&vertex_cstring, ShaderStage::Vertex, &mut report);

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, fragment_shader);
            gl::AttachShader(program, vertex_shader);
            gl::LinkProgram(program);
        }

        let mut status = GLint::from(gl::FALSE);
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        }
        report.linked = status == GLint::from(gl::TRUE);

        let link_log = program_info_log(program);
        if !link_log.is_empty() {
            warn!("{}", link_log);
            report.diagnostics.push(link_log.clone());
        }

        unsafe {
            gl::DetachShader(program, fragment_shader);
            gl::DetachShader(program, vertex_shader);
            gl::DeleteShader(fragment_shader);
            gl::DeleteShader(vertex_shader);
        }

        let shader_program = ShaderProgram { id: program, report };

        if strict {
            shader_program.check()?;
        }

        debug!("Shader program {} ready", shader_program.id);
        Ok(shader_program)
    }

    fn check(&self) -> Result<(), ShaderError> {
        let joined = || self.report.diagnostics.join("\n");
        if !self.report.fragment_compiled {
            return Err(ShaderError::Compilation {
                stage: ShaderStage::Fragment,
                log: joined(),
            });
        }
        if !self.report.vertex_compiled {
            return Err(ShaderError::Compilation {
                stage: ShaderStage::Vertex,
                log: joined(),
            });
        }
        if !self.report.linked {
            return Err(ShaderError::Linking(joined()));
        }
        Ok(())
    }

    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn report(&self) -> &LinkReport {
        &self.report
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
    }
}

fn compile_stage(source: &CString, stage: ShaderStage, report: &mut LinkReport) -> GLuint {
    let kind = match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    };

    let shader = unsafe { gl::CreateShader(kind) };
    unsafe {
        gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(shader);
    }

    let mut status = GLint::from(gl::FALSE);
    unsafe {
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
    }
    let compiled = status == GLint::from(gl::TRUE);
    match stage {
        ShaderStage::Vertex => report.vertex_compiled = compiled,
        ShaderStage::Fragment => report.fragment_compiled = compiled,
    }

    let log = shader_info_log(shader);
    if !log.is_empty() {
        warn!("{} shader: {}", stage, log);
        report.diagnostics.push(log);
    }

    shader
}

fn shader_info_log(shader: GLuint) -> String {
    let mut len = 0;
    unsafe {
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetShaderInfoLog(shader, len, &mut written, buffer.as_mut_ptr() as *mut GLchar);
    }
    log_text(buffer, written)
}

fn program_info_log(program: GLuint) -> String {
    let mut len = 0;
    unsafe {
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetProgramInfoLog(program, len, &mut written, buffer.as_mut_ptr() as *mut GLchar);
    }
    log_text(buffer, written)
}

/// Info logs come back NUL terminated and often end in a newline.
fn log_text(mut buffer: Vec<u8>, written: GLsizei) -> String {
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file_reads_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = "#version 400 core\nvoid main() {}\n";
        file.write_all(source.as_bytes()).unwrap();

        assert_eq!(load_file(file.path()).unwrap(), source);
    }

    #[test]
    fn test_load_file_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.frag");

        match load_file(&path) {
            Err(ShaderError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_nul_byte_rejected_before_gl() {
        // GL is never loaded in tests, so reaching the driver would panic.
        let result = ShaderProgram::compile_and_link("void main() {}\0", "void main() {}", false);
        assert!(matches!(result, Err(ShaderError::Nul(_))));

        let result = ShaderProgram::compile_and_link("void main() {}", "\0", true);
        assert!(matches!(result, Err(ShaderError::Nul(_))));
    }

    #[test]
    fn test_log_text_trims_terminator() {
        let raw = b"0:1(1): error: syntax error\n\0".to_vec();
        let written = (raw.len() - 1) as GLsizei;
        assert_eq!(log_text(raw, written), "0:1(1): error: syntax error");
    }

    #[test]
    fn test_report_cleanliness() {
        let mut report = LinkReport {
            fragment_compiled: true,
            vertex_compiled: true,
            linked: true,
            diagnostics: Vec::new(),
        };
        assert!(report.is_clean());

        report.diagnostics.push("warning: unused variable".to_string());
        assert!(!report.is_clean());
    }
}
