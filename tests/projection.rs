//! Projection and view math for the scene camera.
//!
//! Conventions:
//! - Right-handed view space (camera looks down -Z).
//! - Clip/NDC depth range is [0, 1] (wgpu). Near -> 0, Far -> 1.
//! - Texture/screen UVs have origin at top-left (v = 0 at top).

use gem_overlay::scene::camera::{Projection, Z_FAR, Z_NEAR};
use gem_overlay::scene::DepthOscillator;
use glam::{Mat4, Vec2, Vec3, Vec4};

fn ndc_xy_to_uv(ndc_xy: Vec2) -> Vec2 {
    Vec2::new(ndc_xy.x * 0.5 + 0.5, 0.5 - ndc_xy.y * 0.5)
}

fn project(vp: Mat4, world: Vec3) -> Vec3 {
    let clip: Vec4 = vp * world.extend(1.0);
    clip.truncate() / clip.w
}

#[test]
fn near_and_far_planes_map_to_wgpu_depth_range() {
    let proj = Projection::new(400, 400).matrix();

    let near = project(proj, Vec3::new(0.0, 0.0, -Z_NEAR));
    let far = project(proj, Vec3::new(0.0, 0.0, -Z_FAR));

    assert!(near.z.abs() < 1e-5, "near -> depth {}", near.z);
    assert!((far.z - 1.0).abs() < 1e-5, "far -> depth {}", far.z);
}

#[test]
fn quad_fills_45_degree_view_at_matching_distance() {
    // A 4-unit tall quad fills the vertical FOV at 2 / tan(22.5 deg).
    let distance = 2.0 / 22.5f32.to_radians().tan();
    let vp = Projection::new(400, 400).matrix()
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -distance));

    let top = project(vp, Vec3::new(0.0, 2.0, 0.0));
    let bottom = project(vp, Vec3::new(0.0, -2.0, 0.0));

    assert!((top.y - 1.0).abs() < 1e-4, "top edge at {}", top.y);
    assert!((bottom.y + 1.0).abs() < 1e-4, "bottom edge at {}", bottom.y);
}

#[test]
fn quad_top_edge_lands_on_texture_row_zero() {
    let vp = Projection::new(400, 400).matrix() * DepthOscillator::default().view_matrix();

    let top_left = ndc_xy_to_uv(project(vp, Vec3::new(-2.0, 2.0, 0.0)).truncate());
    let bottom_left = ndc_xy_to_uv(project(vp, Vec3::new(-2.0, -2.0, 0.0)).truncate());

    // (-2, 2) carries uv (0, 0); it must be above (-2, -2) on screen.
    assert!(top_left.y < bottom_left.y);
}

#[test]
fn gem_sits_in_front_of_backdrop_for_whole_sweep() {
    let proj = Projection::new(400, 400).matrix();
    let mut camera = DepthOscillator::default();

    for _ in 0..camera.period() {
        let vp = proj * camera.view_matrix();
        let backdrop = project(vp, Vec3::ZERO);
        let table = project(vp, Vec3::new(0.0, 0.0, 2.0));

        assert!(backdrop.z > 0.0 && backdrop.z < 1.0);
        assert!(table.z > 0.0 && table.z < backdrop.z);
        camera.advance();
    }
}

#[test]
fn wide_window_squeezes_x_only() {
    let square = Projection::new(400, 400).matrix();
    let wide = Projection::new(800, 400).matrix();
    let p = Vec3::new(1.0, 1.0, -5.0);

    let a = project(square, p);
    let b = project(wide, p);

    assert!((b.x - a.x / 2.0).abs() < 1e-6);
    assert!((b.y - a.y).abs() < 1e-6);
}
