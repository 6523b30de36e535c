//! Shared helpers for building synthetic binary STL buffers
//!
//! Not every test target uses every helper.
#![allow(dead_code)]

/// A triangle as three (x, y, z) vertices
pub type Tri = [[f32; 3]; 3];

/// Serialize triangles into a binary STL buffer
///
/// 80-byte zero header, little-endian triangle count, then 50-byte records
/// with a zeroed normal and attribute field.
pub fn build_stl(triangles: &[Tri]) -> Vec<u8> {
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        buf.extend_from_slice(&[0u8; 12]);
        for v in tri {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

/// A closed, consistently wound axis-aligned box with one corner at the origin
pub fn box_triangles(sx: f32, sy: f32, sz: f32) -> Vec<Tri> {
    let p = [
        [0.0, 0.0, 0.0],
        [sx, 0.0, 0.0],
        [sx, sy, 0.0],
        [0.0, sy, 0.0],
        [0.0, 0.0, sz],
        [sx, 0.0, sz],
        [sx, sy, sz],
        [0.0, sy, sz],
    ];
    [
        [3, 2, 1],
        [1, 0, 3],
        [4, 5, 6],
        [6, 7, 4],
        [0, 1, 5],
        [5, 4, 0],
        [1, 2, 6],
        [6, 5, 1],
        [2, 3, 7],
        [7, 6, 2],
        [3, 0, 4],
        [4, 7, 3],
    ]
    .iter()
    .map(|&[a, b, c]| [p[a], p[b], p[c]])
    .collect()
}

/// Shift every vertex by a constant offset
pub fn translate(triangles: &[Tri], offset: [f32; 3]) -> Vec<Tri> {
    triangles
        .iter()
        .map(|tri| {
            tri.map(|v| [v[0] + offset[0], v[1] + offset[1], v[2] + offset[2]])
        })
        .collect()
}

/// Reverse the winding of every triangle
pub fn reverse_winding(triangles: &[Tri]) -> Vec<Tri> {
    triangles.iter().map(|&[a, b, c]| [a, c, b]).collect()
}
