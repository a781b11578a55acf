use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed unit cube centered on the origin, shared by every instance.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl BoxGeometry {
    /// Box with the given edge lengths; four vertices per face so each face
    /// keeps a flat normal.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
        #[rustfmt::skip]
        let vertices = vec![
            // +Z face
            Vertex { position: [-x, -y,  z], normal: [0.0, 0.0, 1.0] },
            Vertex { position: [ x, -y,  z], normal: [0.0, 0.0, 1.0] },
            Vertex { position: [ x,  y,  z], normal: [0.0, 0.0, 1.0] },
            Vertex { position: [-x,  y,  z], normal: [0.0, 0.0, 1.0] },
            // -Z face
            Vertex { position: [ x, -y, -z], normal: [0.0, 0.0, -1.0] },
            Vertex { position: [-x, -y, -z], normal: [0.0, 0.0, -1.0] },
            Vertex { position: [-x,  y, -z], normal: [0.0, 0.0, -1.0] },
            Vertex { position: [ x,  y, -z], normal: [0.0, 0.0, -1.0] },
            // +X face
            Vertex { position: [ x, -y,  z], normal: [1.0, 0.0, 0.0] },
            Vertex { position: [ x, -y, -z], normal: [1.0, 0.0, 0.0] },
            Vertex { position: [ x,  y, -z], normal: [1.0, 0.0, 0.0] },
            Vertex { position: [ x,  y,  z], normal: [1.0, 0.0, 0.0] },
            // -X face
            Vertex { position: [-x, -y, -z], normal: [-1.0, 0.0, 0.0] },
            Vertex { position: [-x, -y,  z], normal: [-1.0, 0.0, 0.0] },
            Vertex { position: [-x,  y,  z], normal: [-1.0, 0.0, 0.0] },
            Vertex { position: [-x,  y, -z], normal: [-1.0, 0.0, 0.0] },
            // +Y face
            Vertex { position: [-x,  y,  z], normal: [0.0, 1.0, 0.0] },
            Vertex { position: [ x,  y,  z], normal: [0.0, 1.0, 0.0] },
            Vertex { position: [ x,  y, -z], normal: [0.0, 1.0, 0.0] },
            Vertex { position: [-x,  y, -z], normal: [0.0, 1.0, 0.0] },
            // -Y face
            Vertex { position: [-x, -y, -z], normal: [0.0, -1.0, 0.0] },
            Vertex { position: [ x, -y, -z], normal: [0.0, -1.0, 0.0] },
            Vertex { position: [ x, -y,  z], normal: [0.0, -1.0, 0.0] },
            Vertex { position: [-x, -y,  z], normal: [0.0, -1.0, 0.0] },
        ];
        #[rustfmt::skip]
        let indices: Vec<u16> = vec![
            0,1,2, 2,3,0,       // +Z
            4,5,6, 6,7,4,       // -Z
            8,9,10, 10,11,8,    // +X
            12,13,14, 14,15,12, // -X
            16,17,18, 18,19,16, // +Y
            20,21,22, 22,23,20, // -Y
        ];
        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn unit_cube_counts() {
        let cube = BoxGeometry::default();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.index_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
    }

    #[test]
    fn faces_wind_counter_clockwise() {
        let cube = BoxGeometry::default();
        for tri in cube.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| cube.vertices[i as usize]);
            let pa = Vec3::from(a.position);
            let face = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
            assert!(face.normalize().abs_diff_eq(Vec3::from(a.normal), 1e-6));
        }
    }
}
