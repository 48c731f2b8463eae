use std::borrow::Cow;

use wgpu::util::DeviceExt;

use super::frame::GpuFrame;
use crate::driver::{BufferKind, Driver, MeshBinding, ProgramOptions};
use crate::geometry::{DrawCall, VertexLayout};
use crate::paint::Color;
use crate::shader::{self, CompiledShader, ShaderError, ShaderSource};

/// `Driver` over a wgpu device/queue pair.
///
/// Every handle it returns is a plain wgpu object; wgpu releases the GPU side
/// when the last handle is dropped.
pub struct WgpuDriver {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_format: wgpu::TextureFormat,
}

/// A compiled stage: the validated IR plus the driver-side module.
pub struct WgpuShader {
    compiled: CompiledShader,
    module: wgpu::ShaderModule,
}

impl WgpuDriver {
    pub(crate) fn new(device: wgpu::Device, queue: wgpu::Queue, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            device,
            queue,
            surface_format,
        }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    fn polygon_mode(&self, options: ProgramOptions) -> wgpu::PolygonMode {
        if !options.wireframe {
            return wgpu::PolygonMode::Fill;
        }
        if self.device.features().contains(wgpu::Features::POLYGON_MODE_LINE) {
            wgpu::PolygonMode::Line
        } else {
            log::warn!("wireframe requested but POLYGON_MODE_LINE is unavailable; using fill");
            wgpu::PolygonMode::Fill
        }
    }
}

impl Driver for WgpuDriver {
    type Shader = WgpuShader;
    type Program = wgpu::RenderPipeline;
    type Buffer = wgpu::Buffer;
    type Target = GpuFrame;

    fn compile_shader(&self, source: &ShaderSource) -> Result<Self::Shader, ShaderError> {
        let compiled = shader::compile(source)?;

        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(source.label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(compiled.module().clone())),
        });

        Ok(WgpuShader { compiled, module })
    }

    fn link_program(
        &self,
        label: &str,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
        layout: &VertexLayout,
        options: ProgramOptions,
    ) -> Result<Self::Program, ShaderError> {
        shader::link(&vertex.compiled, &fragment.compiled, layout)?;

        let pipeline_layout = self.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let attributes = layout.wgpu_attributes();
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: layout.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &attributes,
        }];

        let pipeline = self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex.module,
                entry_point: Some(vertex.compiled.entry_point()),
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment.module,
                entry_point: Some(fragment.compiled.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: self.polygon_mode(options),
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(pipeline)
    }

    fn create_buffer(&self, label: &str, kind: BufferKind, contents: &[u8]) -> Self::Buffer {
        let usage = match kind {
            BufferKind::Vertex => wgpu::BufferUsages::VERTEX,
            BufferKind::Index => wgpu::BufferUsages::INDEX,
        };

        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage,
        })
    }

    fn buffer_size(&self, buffer: &Self::Buffer) -> u64 {
        buffer.size()
    }

    fn clear(&self, target: &mut Self::Target, color: Color) {
        // The pass clears on load and records nothing else.
        let _rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("zera clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    fn draw(&self, target: &mut Self::Target, program: &Self::Program, mesh: MeshBinding<'_, Self>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("zera draw"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(program);
        rpass.set_vertex_buffer(0, mesh.vertices.slice(..));

        match (mesh.call, mesh.indices) {
            (DrawCall::Arrays { vertex_count }, _) => {
                rpass.draw(0..vertex_count, 0..1);
            }
            (DrawCall::Indexed { index_count }, Some(indices)) => {
                rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..index_count, 0, 0..1);
            }
            (DrawCall::Indexed { .. }, None) => {
                log::warn!("indexed draw without an index buffer; skipped");
            }
        }
    }
}
