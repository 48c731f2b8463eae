//! Scene resources: the one program and one mesh drawn every frame.
//!
//! Everything is created in `Scene::new` and released when the scene is
//! dropped. Nothing is recreated while the loop runs.

use crate::driver::{BufferKind, Driver, MeshBinding, ProgramOptions};
use crate::geometry::{DrawCall, Geometry, VertexLayout};
use crate::paint::Color;
use crate::shader::{ShaderSource, POSITION_VERTEX, SOLID_FRAGMENT};

/// Framebuffer clear color.
pub const CLEAR_COLOR: Color = Color::rgba(0.3, 0.1, 0.2, 1.0);

/// What to draw and how.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub geometry: Geometry,
    pub vertex_shader: ShaderSource,
    pub fragment_shader: ShaderSource,
    pub clear_color: Color,
    /// Draw triangle edges only (falls back to fill when unsupported).
    pub wireframe: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::quad(),
            vertex_shader: POSITION_VERTEX,
            fragment_shader: SOLID_FRAGMENT,
            clear_color: CLEAR_COLOR,
            wireframe: false,
        }
    }
}

/// GPU buffers of the static geometry.
///
/// Declaration order is release order: index buffer before vertex buffer.
struct Mesh<D: Driver> {
    index_buffer: Option<D::Buffer>,
    vertex_buffer: D::Buffer,
    call: DrawCall,
}

/// All GPU resources used by the loop.
///
/// Fields are declared in reverse acquisition order (program, vertex buffer,
/// index buffer are acquired in that order), so dropping a `Scene` releases
/// them last-in first-out.
pub struct Scene<D: Driver> {
    mesh: Mesh<D>,
    program: Option<D::Program>,
    clear_color: Color,
}

impl<D: Driver> Scene<D> {
    /// Compiles and links the program, then uploads the geometry.
    ///
    /// Shader failures are logged and leave the scene without a program; frames
    /// are still cleared and presented, the draw call is skipped.
    pub fn new(driver: &D, config: &SceneConfig) -> Self {
        let layout = config.geometry.layout();
        let program = build_program(driver, config, &layout);

        if let Err(e) = config.geometry.validate() {
            log::warn!("geometry: {e}");
        }

        let vertex_label = format!("{} vertices", config.geometry.label);
        let vertex_bytes = config.geometry.vertex_bytes();
        let vertex_buffer = driver.create_buffer(&vertex_label, BufferKind::Vertex, vertex_bytes);
        log::debug!("uploaded {} bytes to `{vertex_label}`", vertex_bytes.len());

        let index_buffer = config.geometry.index_bytes().map(|bytes| {
            let label = format!("{} indices", config.geometry.label);
            let buffer = driver.create_buffer(&label, BufferKind::Index, bytes);
            log::debug!("uploaded {} bytes to `{label}`", bytes.len());
            buffer
        });

        Self {
            mesh: Mesh {
                index_buffer,
                vertex_buffer,
                call: config.geometry.draw_call(),
            },
            program,
            clear_color: config.clear_color,
        }
    }

    /// Whether the shader program compiled and linked.
    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn draw_call(&self) -> DrawCall {
        self.mesh.call
    }

    /// GPU-side sizes of the vertex and index buffers, in bytes.
    pub fn buffer_sizes(&self, driver: &D) -> (u64, Option<u64>) {
        (
            driver.buffer_size(&self.mesh.vertex_buffer),
            self.mesh.index_buffer.as_ref().map(|b| driver.buffer_size(b)),
        )
    }

    /// Records one frame: clear, then a single draw of the whole mesh.
    pub fn render(&self, driver: &D, target: &mut D::Target) {
        driver.clear(target, self.clear_color);

        let Some(program) = self.program.as_ref() else {
            return;
        };

        driver.draw(
            target,
            program,
            MeshBinding {
                vertices: &self.mesh.vertex_buffer,
                indices: self.mesh.index_buffer.as_ref(),
                call: self.mesh.call,
            },
        );
    }
}

impl<D: Driver> Drop for Scene<D> {
    fn drop(&mut self) {
        log::debug!("releasing scene resources");
    }
}

fn build_program<D: Driver>(driver: &D, config: &SceneConfig, layout: &VertexLayout) -> Option<D::Program> {
    let vertex = driver
        .compile_shader(&config.vertex_shader)
        .inspect_err(|e| log::error!("{e}"))
        .ok();
    let fragment = driver
        .compile_shader(&config.fragment_shader)
        .inspect_err(|e| log::error!("{e}"))
        .ok();

    let (vertex, fragment) = (vertex?, fragment?);

    let label = format!("{} program", config.geometry.label);
    let options = ProgramOptions {
        wireframe: config.wireframe,
    };
    let program = driver
        .link_program(&label, &vertex, &fragment, layout, options)
        .inspect_err(|e| log::error!("{e}"))
        .ok();

    // Stage units are not needed once linked (or once linking failed).
    drop(fragment);
    drop(vertex);

    if program.is_some() {
        log::info!("linked `{label}`");
    }
    program
}
