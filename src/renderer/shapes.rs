//! Shape generation for 2D primitives

use glam::Vec2;

use super::Quad;
use super::vertex::Vertex;

/// Map a logical canvas point (origin top-left, y down) to clip space
#[inline]
pub fn to_ndc(point: Vec2, canvas: Vec2) -> Vec2 {
    Vec2::new(point.x / canvas.x * 2.0 - 1.0, 1.0 - point.y / canvas.y * 2.0)
}

/// Two triangles covering a quad, in clip space
pub fn quad_vertices(quad: &Quad, canvas: Vec2) -> [Vertex; 6] {
    let min = to_ndc(quad.min, canvas);
    let max = to_ndc(quad.min + Vec2::splat(quad.size), canvas);
    let c = quad.color;

    // min.y is the top edge, which sits above max.y in clip space
    let tl = Vertex::new(min.x, min.y, c);
    let tr = Vertex::new(max.x, min.y, c);
    let bl = Vertex::new(min.x, max.y, c);
    let br = Vertex::new(max.x, max.y, c);

    [tl, bl, tr, tr, bl, br]
}

/// Vertices for a whole draw list
pub fn mesh(quads: &[Quad], canvas: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(quads.len() * 6);
    for quad in quads {
        vertices.extend_from_slice(&quad_vertices(quad, canvas));
    }
    vertices
}
