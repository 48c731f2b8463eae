/// The frame being recorded: the acquired surface image, a view of it, and the
/// encoder that the clear and draw passes are recorded into.
///
/// Hand it back to `Gpu::present` within the same redraw; the next image cannot
/// be acquired while this one is held.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
