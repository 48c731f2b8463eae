/// One `f32`-vector attribute inside an interleaved vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    /// Shader input location (`@location(n)`).
    pub location: u32,
    /// Number of `f32` components, 1..=4.
    pub components: u32,
    /// Byte offset from the start of the vertex.
    pub offset: u64,
}

impl VertexAttribute {
    pub fn wgpu_format(&self) -> Option<wgpu::VertexFormat> {
        match self.components {
            1 => Some(wgpu::VertexFormat::Float32),
            2 => Some(wgpu::VertexFormat::Float32x2),
            3 => Some(wgpu::VertexFormat::Float32x3),
            4 => Some(wgpu::VertexFormat::Float32x4),
            _ => None,
        }
    }

    pub fn byte_len(&self) -> u64 {
        self.components as u64 * std::mem::size_of::<f32>() as u64
    }
}

/// Interleaved vertex layout for a single vertex buffer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices.
    pub stride: u64,
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Tightly packed `vec3<f32>` position at location 0.
    pub fn positions3() -> Self {
        Self {
            stride: 3 * std::mem::size_of::<f32>() as u64,
            attributes: vec![VertexAttribute {
                location: 0,
                components: 3,
                offset: 0,
            }],
        }
    }

    pub fn locations(&self) -> impl Iterator<Item = u32> + '_ {
        self.attributes.iter().map(|a| a.location)
    }

    /// Checks that every attribute fits inside the stride, has a supported
    /// component count, and that no location is used twice.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = Vec::with_capacity(self.attributes.len());
        for attr in &self.attributes {
            if attr.wgpu_format().is_none() {
                return Err(format!(
                    "attribute @location({}) has {} components; expected 1..=4",
                    attr.location, attr.components
                ));
            }
            if attr.offset + attr.byte_len() > self.stride {
                return Err(format!(
                    "attribute @location({}) ends at byte {} past stride {}",
                    attr.location,
                    attr.offset + attr.byte_len(),
                    self.stride
                ));
            }
            if seen.contains(&attr.location) {
                return Err(format!("@location({}) declared twice", attr.location));
            }
            seen.push(attr.location);
        }
        Ok(())
    }

    /// wgpu attribute descriptors; unsupported component counts are skipped
    /// (`validate` reports them).
    pub fn wgpu_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        self.attributes
            .iter()
            .filter_map(|a| {
                a.wgpu_format().map(|format| wgpu::VertexAttribute {
                    format,
                    offset: a.offset,
                    shader_location: a.location,
                })
            })
            .collect()
    }
}
