//! Hand-authored gem mesh: a 12-sided crown, a bevelled girdle and a flat
//! table, all flat shaded.

use crate::renderer::LitVertex;

pub const CROWN_TRIANGLES: usize = 12;
pub const SIDE_TRIANGLES: usize = 24;
pub const CAP_TRIANGLES: usize = 10;
pub const TRIANGLE_COUNT: usize = CROWN_TRIANGLES + SIDE_TRIANGLES + CAP_TRIANGLES;

const APEX: [f32; 3] = [0.0, 0.0, 0.0];

/// Outer ring at z = 1.75, points B through M.
const OUTER: [[f32; 3]; 12] = [
    [0.0, -1.0, 1.75],
    [-0.5, -0.866, 1.75],
    [-0.866, -0.5, 1.75],
    [-1.0, 0.0, 1.75],
    [-0.866, 0.5, 1.75],
    [-0.5, 0.866, 1.75],
    [0.0, 1.0, 1.75],
    [0.5, 0.866, 1.75],
    [0.866, 0.5, 1.75],
    [1.0, 0.0, 1.75],
    [0.866, -0.5, 1.75],
    [0.5, -0.866, 1.75],
];

/// Inner ring at z = 2.0, points N through Y.
const INNER: [[f32; 3]; 12] = [
    [0.0, -0.75, 2.0],
    [-0.375, -0.6495, 2.0],
    [-0.6495, -0.375, 2.0],
    [-0.75, 0.0, 2.0],
    [-0.6495, 0.375, 2.0],
    [-0.375, 0.6495, 2.0],
    [0.0, 0.75, 2.0],
    [0.375, 0.6495, 2.0],
    [0.6495, 0.375, 2.0],
    [0.75, 0.0, 2.0],
    [0.6495, -0.375, 2.0],
    [0.375, -0.6495, 2.0],
];

/// Table outline. Same ring as `INNER` but the 0.6495 coordinates are
/// rounded to 0.65; kept as authored.
const TABLE: [[f32; 3]; 12] = [
    [0.0, -0.75, 2.0],
    [-0.375, -0.65, 2.0],
    [-0.65, -0.375, 2.0],
    [-0.75, 0.0, 2.0],
    [-0.65, 0.375, 2.0],
    [-0.375, 0.65, 2.0],
    [0.0, 0.75, 2.0],
    [0.375, 0.65, 2.0],
    [0.65, 0.375, 2.0],
    [0.75, 0.0, 2.0],
    [0.65, -0.375, 2.0],
    [0.375, -0.65, 2.0],
];

const CROWN_NORMALS: [[f32; 3]; 12] = [
    [-0.22663, -0.84565, -0.48323],
    [-0.61907, -0.61907, -0.48323],
    [-0.84565, -0.22663, -0.48323],
    [-0.84565, 0.22663, -0.48323],
    [-0.61907, 0.61907, -0.48323],
    [-0.22663, 0.84565, -0.48323],
    [0.22663, 0.84565, -0.48323],
    [0.61907, 0.61907, -0.48323],
    [0.84565, 0.22663, -0.48323],
    [0.84565, -0.22663, -0.48323],
    [0.61907, -0.61907, -0.48323],
    [0.22663, -0.84565, -0.48323],
];

const SIDE_NORMALS: [[f32; 3]; 12] = [
    [-0.18619, -0.69474, 0.69474],
    [-0.50589, -0.50589, 0.69474],
    [-0.69474, -0.18619, 0.69474],
    [-0.69474, 0.18619, 0.69474],
    [-0.50589, 0.50589, 0.69474],
    [-0.18619, 0.69474, 0.69474],
    [0.18619, 0.69474, 0.69474],
    [0.50589, 0.50589, 0.69474],
    [0.69474, 0.18619, 0.69474],
    [0.69474, -0.18619, 0.69474],
    [0.50589, -0.50589, 0.69474],
    [0.18619, -0.69474, 0.69474],
];

const TABLE_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Vertex at which the table fan is anchored (Y on the table ring).
const TABLE_ANCHOR: usize = 11;

fn push_triangle(out: &mut Vec<LitVertex>, normal: [f32; 3], corners: [[f32; 3]; 3]) {
    out.extend(corners.into_iter().map(|pos| LitVertex { pos, normal }));
}

/// Triangle list for the gem, three vertices per facet.
pub fn gem_vertices() -> Vec<LitVertex> {
    let mut out = Vec::with_capacity(TRIANGLE_COUNT * 3);

    for i in 0..12 {
        let next = (i + 1) % 12;
        push_triangle(&mut out, CROWN_NORMALS[i], [APEX, OUTER[i], OUTER[next]]);
    }

    for i in 0..12 {
        let next = (i + 1) % 12;
        let normal = SIDE_NORMALS[i];
        push_triangle(&mut out, normal, [OUTER[next], OUTER[i], INNER[i]]);
        push_triangle(&mut out, normal, [OUTER[next], INNER[i], INNER[next]]);
    }

    // Fan from Y: YXW, YWV, ..., YON.
    for k in 0..CAP_TRIANGLES {
        let a = TABLE_ANCHOR - 1 - k;
        push_triangle(
            &mut out,
            TABLE_NORMAL,
            [TABLE[TABLE_ANCHOR], TABLE[a], TABLE[a - 1]],
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(verts: &[LitVertex], index: usize) -> [[f32; 3]; 3] {
        [
            verts[index * 3].pos,
            verts[index * 3 + 1].pos,
            verts[index * 3 + 2].pos,
        ]
    }

    #[test]
    fn has_forty_six_triangles() {
        let verts = gem_vertices();
        assert_eq!(TRIANGLE_COUNT, 46);
        assert_eq!(verts.len(), 46 * 3);
    }

    #[test]
    fn crown_starts_at_apex() {
        let verts = gem_vertices();
        assert_eq!(
            triangle(&verts, 0),
            [[0.0, 0.0, 0.0], [0.0, -1.0, 1.75], [-0.5, -0.866, 1.75]]
        );
        // AMB closes the ring
        assert_eq!(
            triangle(&verts, 11),
            [[0.0, 0.0, 0.0], [0.5, -0.866, 1.75], [0.0, -1.0, 1.75]]
        );
        for v in &verts[..CROWN_TRIANGLES * 3] {
            assert_eq!(v.normal[2], -0.48323);
        }
    }

    #[test]
    fn side_quads_match_authored_corners() {
        let verts = gem_vertices();
        // CBNO
        assert_eq!(
            triangle(&verts, 12),
            [[-0.5, -0.866, 1.75], [0.0, -1.0, 1.75], [0.0, -0.75, 2.0]]
        );
        assert_eq!(
            triangle(&verts, 13),
            [[-0.5, -0.866, 1.75], [0.0, -0.75, 2.0], [-0.375, -0.6495, 2.0]]
        );
        // BMYN
        assert_eq!(
            triangle(&verts, 34),
            [[0.0, -1.0, 1.75], [0.5, -0.866, 1.75], [0.375, -0.6495, 2.0]]
        );
        assert_eq!(
            triangle(&verts, 35),
            [[0.0, -1.0, 1.75], [0.375, -0.6495, 2.0], [0.0, -0.75, 2.0]]
        );
        assert_eq!(verts[34 * 3].normal, [0.18619, -0.69474, 0.69474]);
    }

    #[test]
    fn table_is_a_fan_from_the_correction_vertex() {
        let verts = gem_vertices();
        let cap = 36;
        // YXW
        assert_eq!(
            triangle(&verts, cap),
            [[0.375, -0.65, 2.0], [0.65, -0.375, 2.0], [0.75, 0.0, 2.0]]
        );
        // YON
        assert_eq!(
            triangle(&verts, cap + 9),
            [[0.375, -0.65, 2.0], [-0.375, -0.65, 2.0], [0.0, -0.75, 2.0]]
        );
        for v in &verts[cap * 3..] {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
            assert_eq!(v.pos[2], 2.0);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        for v in gem_vertices() {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            // authored to five places; the 45 degree side facets are a bit short
            assert!((len - 1.0).abs() < 1e-2, "normal {:?}", v.normal);
        }
    }
}
