use super::layout::VertexLayout;

/// The single draw command issued per frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCall {
    /// Non-indexed triangle list over `0..vertex_count`.
    Arrays { vertex_count: u32 },
    /// Indexed triangle list over `0..index_count`, `u32` indices.
    Indexed { index_count: u32 },
}

/// Hardcoded geometry uploaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub label: &'static str,
    pub vertices: &'static [[f32; 3]],
    pub indices: Option<&'static [u32]>,
}

const TRIANGLE_VERTICES: [[f32; 3]; 3] = [
    [-0.5, -0.5, 0.0], // left
    [0.5, -0.5, 0.0],  // right
    [0.0, 0.5, 0.0],   // top
];

const QUAD_VERTICES: [[f32; 3]; 4] = [
    [0.5, 0.5, 0.0],   // top right
    [0.5, -0.5, 0.0],  // bottom right
    [-0.5, -0.5, 0.0], // bottom left
    [-0.5, 0.5, 0.0],  // top left
];

// Two triangles sharing the 1-3 diagonal.
const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

impl Geometry {
    /// Single triangle, drawn without an index buffer.
    pub fn triangle() -> Self {
        Self {
            label: "triangle",
            vertices: &TRIANGLE_VERTICES,
            indices: None,
        }
    }

    /// Axis-aligned quad, drawn as two indexed triangles.
    pub fn quad() -> Self {
        Self {
            label: "quad",
            vertices: &QUAD_VERTICES,
            indices: Some(&QUAD_INDICES),
        }
    }

    pub fn layout(&self) -> VertexLayout {
        VertexLayout::positions3()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }

    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.map(bytemuck::cast_slice)
    }

    /// The draw covering the whole geometry.
    pub fn draw_call(&self) -> DrawCall {
        match self.indices {
            Some(indices) => DrawCall::Indexed {
                index_count: indices.len() as u32,
            },
            None => DrawCall::Arrays {
                vertex_count: self.vertices.len() as u32,
            },
        }
    }

    /// Checks that indices stay in range and that the primitive count is whole.
    pub fn validate(&self) -> Result<(), String> {
        match self.indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(format!("{}: {} indices is not a triangle list", self.label, indices.len()));
                }
                let n = self.vertices.len() as u32;
                if let Some(bad) = indices.iter().find(|&&i| i >= n) {
                    return Err(format!("{}: index {bad} out of range for {n} vertices", self.label));
                }
            }
            None => {
                if self.vertices.len() % 3 != 0 {
                    return Err(format!(
                        "{}: {} vertices is not a triangle list",
                        self.label,
                        self.vertices.len()
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::quad()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_indexed_over_six_indices() {
        let quad = Geometry::quad();
        assert_eq!(quad.draw_call(), DrawCall::Indexed { index_count: 6 });
        assert!(quad.validate().is_ok());
    }

    #[test]
    fn triangle_draws_arrays() {
        let tri = Geometry::triangle();
        assert_eq!(tri.draw_call(), DrawCall::Arrays { vertex_count: 3 });
        assert!(tri.index_bytes().is_none());
        assert!(tri.validate().is_ok());
    }

    #[test]
    fn byte_views_match_declared_arrays() {
        let quad = Geometry::quad();
        assert_eq!(quad.vertex_bytes().len(), std::mem::size_of_val(&QUAD_VERTICES));
        assert_eq!(quad.index_bytes().map(<[u8]>::len), Some(std::mem::size_of_val(&QUAD_INDICES)));
        assert_eq!(quad.vertex_bytes().len(), 48);
        assert_eq!(quad.index_bytes().map(<[u8]>::len), Some(24));
    }

    #[test]
    fn vertex_stride_matches_layout() {
        let quad = Geometry::quad();
        let stride = quad.layout().stride as usize;
        assert_eq!(quad.vertex_bytes().len(), stride * quad.vertices.len());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        static BAD: [u32; 3] = [0, 1, 4];
        let geometry = Geometry {
            label: "bad",
            vertices: &QUAD_VERTICES,
            indices: Some(&BAD),
        };
        assert!(geometry.validate().is_err());
    }
}
