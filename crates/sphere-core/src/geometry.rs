use glam::Vec3;

/// Triangulated UV sphere used as the base point cloud.
///
/// Vertex count is `(width_segments + 1) * (height_segments + 1)`; the seam
/// column and both poles are duplicated so rows stay index-aligned, which the
/// morph targets rely on.
pub struct SphereGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    positions_dirty: bool,
}

impl SphereGeometry {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);

        let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        let mut normals = Vec::with_capacity(positions.capacity());
        for i in 0..=h {
            let v = i as f32 / h as f32;
            let theta = v * std::f32::consts::PI;
            let (sin_t, cos_t) = theta.sin_cos();
            for j in 0..=w {
                let u = j as f32 / w as f32;
                let phi = u * std::f32::consts::TAU;
                let (sin_p, cos_p) = phi.sin_cos();
                let n = Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p);
                positions.push(n * radius);
                normals.push(n);
            }
        }

        let stride = w + 1;
        let mut indices = Vec::with_capacity((w * h * 6) as usize);
        for i in 0..h {
            for j in 0..w {
                let a = i * stride + j;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b]);
                indices.extend_from_slice(&[b, c, d]);
            }
        }

        let mut geometry = Self {
            positions,
            normals,
            indices,
            positions_dirty: false,
        };
        // Flag the buffer for its first upload and rebuild normals, even
        // though nothing mutates positions after generation.
        geometry.mark_positions_dirty();
        geometry.compute_vertex_normals();
        geometry
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn mark_positions_dirty(&mut self) {
        self.positions_dirty = true;
    }

    /// Consume the upload flag; the renderer calls this once per frame.
    #[inline]
    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::take(&mut self.positions_dirty)
    }

    /// Rebuild per-vertex normals by averaging adjacent face normals.
    pub fn compute_vertex_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }
        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }
}
