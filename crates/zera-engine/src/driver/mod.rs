//! GPU driver seam.
//!
//! `Driver` is the narrow set of GPU operations the bootstrap needs: compile a
//! stage, link a program, upload a static buffer, clear, draw. Handles are
//! owned values that release their GPU object when dropped, so release happens
//! exactly once and on every exit path.
//!
//! `device::WgpuDriver` is the production implementation.

#[cfg(test)]
pub(crate) mod recording;

use crate::geometry::{DrawCall, VertexLayout};
use crate::paint::Color;
use crate::shader::{ShaderError, ShaderSource};

/// What a static buffer is bound as.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferKind {
    Vertex,
    Index,
}

/// Fixed-function state baked into a program at link time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ProgramOptions {
    /// Rasterize triangle edges only.
    pub wireframe: bool,
}

/// Buffers and draw command for one draw.
pub struct MeshBinding<'a, D: Driver + ?Sized> {
    pub vertices: &'a D::Buffer,
    pub indices: Option<&'a D::Buffer>,
    pub call: DrawCall,
}

pub trait Driver {
    /// A compiled shader stage.
    type Shader;
    /// A linked program (both stages + vertex layout + raster state).
    type Program;
    /// A static GPU buffer.
    type Buffer;
    /// Per-frame recording target (acquired surface image + command stream).
    type Target;

    fn compile_shader(&self, source: &ShaderSource) -> Result<Self::Shader, ShaderError>;

    fn link_program(
        &self,
        label: &str,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
        layout: &VertexLayout,
        options: ProgramOptions,
    ) -> Result<Self::Program, ShaderError>;

    /// Creates a buffer initialized with `contents`. The buffer is immutable afterwards.
    fn create_buffer(&self, label: &str, kind: BufferKind, contents: &[u8]) -> Self::Buffer;

    /// Size of `buffer` in bytes as allocated on the GPU.
    fn buffer_size(&self, buffer: &Self::Buffer) -> u64;

    /// Clears the whole color target.
    fn clear(&self, target: &mut Self::Target, color: Color);

    /// Issues one draw of `mesh` with `program`.
    fn draw(&self, target: &mut Self::Target, program: &Self::Program, mesh: MeshBinding<'_, Self>);
}
