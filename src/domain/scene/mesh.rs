use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Interleaved vertex: position followed by RGB color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Floats per vertex in the interleaved buffer
pub const VERTEX_STRIDE_FLOATS: usize = 6;
pub const CUBE_VERTEX_COUNT: usize = 24;
pub const CUBE_INDEX_COUNT: usize = 36;
pub const CUBE_FACE_COUNT: usize = 6;

/// Decorative per-vertex colors, repeated for every face
pub const CUBE_PALETTE: [[f32; 3]; 8] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0],
];

/// Corner signs of the 24 face vertices, scaled by the half extent
#[rustfmt::skip]
const CUBE_CORNERS: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    // Front face
    [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0],
    // Back face
    [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],
    // Top face
    [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0],
    // Bottom face
    [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],
    // Right face
    [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0],
    // Left face
    [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0],
];

/// Two triangles per quad, relative to the face's first vertex
const FACE_TRIANGLES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex and index data of a closed cube
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Indices grouped into triangles
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Build a cube of edge `size` centered at `center`.
///
/// Vertices are emitted face by face (front, back, top, bottom, right, left),
/// four per face, each colored from [`CUBE_PALETTE`] by its position in the
/// sequence. `size` is trusted to be positive.
pub fn generate_box(center: [f32; 3], size: f32) -> Mesh {
    let [x, y, z] = center;
    let s = size / 2.0;

    let vertices = CUBE_CORNERS
        .iter()
        .enumerate()
        .map(|(i, corner)| Vertex {
            position: [corner[0] * s + x, corner[1] * s + y, corner[2] * s + z],
            color: CUBE_PALETTE[i % CUBE_PALETTE.len()],
        })
        .collect();

    let indices = (0..CUBE_FACE_COUNT as u16)
        .flat_map(|face| FACE_TRIANGLES.iter().map(move |i| face * 4 + i))
        .collect();

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_cube_first_vertex_and_triangle() {
        let mesh = generate_box([0.0, 0.0, 0.0], 2.0);
        assert_eq!(mesh.vertices[0].position, [-1.0, -1.0, 1.0]);
        assert_eq!(mesh.vertices[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.triangles().next(), Some([0, 1, 2]));
    }

    #[test]
    fn palette_cycles_every_eight_vertices() {
        let mesh = generate_box([0.0, 0.0, 0.0], 1.0);
        for (i, v) in mesh.vertices.iter().enumerate() {
            assert_eq!(v.color, CUBE_PALETTE[i % 8]);
        }
        assert_eq!(mesh.vertices[7].color, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[22].color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn last_face_indices() {
        let mesh = generate_box([0.0, 0.0, 0.0], 1.0);
        assert_eq!(&mesh.indices[30..], &[20, 21, 22, 20, 22, 23]);
    }

    #[test]
    fn stride_matches_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), VERTEX_STRIDE_FLOATS * std::mem::size_of::<f32>());
    }
}
