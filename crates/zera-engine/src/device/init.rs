/// How `Gpu::new` picks an adapter and configures the device and surface.
///
/// The defaults run on GL and GLES backends as well as Vulkan, Metal and DX12.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends wgpu may pick from.
    pub backends: wgpu::Backends,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO waits for vblank, like a swap interval of 1.
    pub present_mode: wgpu::PresentMode,

    /// Surface alpha mode. Falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Features the device must have; adapter selection fails without them.
    pub required_features: wgpu::Features,

    /// Features enabled only when the adapter offers them.
    pub optional_features: wgpu::Features,

    /// Device limits. Downlevel defaults keep GL adapters eligible.
    pub required_limits: wgpu::Limits,

    /// Frames the surface may queue ahead (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::default(),
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            // Wireframe rendering.
            optional_features: wgpu::Features::POLYGON_MODE_LINE,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
