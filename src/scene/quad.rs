use crate::renderer::TexturedVertex;

pub const HALF_EXTENT: f32 = 2.0;

/// Backdrop rectangle in the z = 0 plane. Texture row 0 lands on the top
/// edge; the corner-to-uv mapping is kept exactly as authored.
pub fn quad_vertices() -> [TexturedVertex; 4] {
    let e = HALF_EXTENT;
    [
        TexturedVertex {
            pos: [-e, e, 0.0],
            uv: [0.0, 0.0],
        },
        TexturedVertex {
            pos: [-e, -e, 0.0],
            uv: [0.0, 1.0],
        },
        TexturedVertex {
            pos: [e, -e, 0.0],
            uv: [1.0, 1.0],
        },
        TexturedVertex {
            pos: [e, e, 0.0],
            uv: [1.0, 0.0],
        },
    ]
}

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_image_corners() {
        let quad = quad_vertices();
        let lookup = |pos: [f32; 3]| quad.iter().find(|v| v.pos == pos).unwrap().uv;

        assert_eq!(lookup([-2.0, 2.0, 0.0]), [0.0, 0.0]);
        assert_eq!(lookup([-2.0, -2.0, 0.0]), [0.0, 1.0]);
        assert_eq!(lookup([2.0, -2.0, 0.0]), [1.0, 1.0]);
        assert_eq!(lookup([2.0, 2.0, 0.0]), [1.0, 0.0]);
    }

    #[test]
    fn indices_cover_both_halves() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < quad_vertices().len()));
        for corner in 0..4u16 {
            assert!(QUAD_INDICES.contains(&corner));
        }
    }
}
