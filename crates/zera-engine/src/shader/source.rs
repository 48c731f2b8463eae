use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// WGSL source for one pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderSource {
    pub label: &'static str,
    pub stage: ShaderStage,
    pub entry_point: &'static str,
    pub code: &'static str,
}

/// Pass-through vertex stage: `@location(0) vec3<f32>` to clip space.
pub const POSITION_VERTEX: ShaderSource = ShaderSource {
    label: "zera position vs",
    stage: ShaderStage::Vertex,
    entry_point: "vs_main",
    code: include_str!("shaders/position.vert.wgsl"),
};

/// Constant-color fragment stage.
pub const SOLID_FRAGMENT: ShaderSource = ShaderSource {
    label: "zera solid fs",
    stage: ShaderStage::Fragment,
    entry_point: "fs_main",
    code: include_str!("shaders/solid.frag.wgsl"),
};
