use glam::{Mat4, Vec3};

use crate::settings::CameraSweep;

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    /// Moving away from the scene (offset decreasing).
    Outward,
    /// Moving towards the scene (offset increasing).
    Inward,
}

/// Bouncing camera depth offset.
///
/// The offset walks from `near` to `far` and back in equal steps. Position is
/// tracked as an integer tick so both ends are reached exactly and the period
/// is always `2 * steps_per_sweep` frames, independent of float rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthOscillator {
    near: f32,
    far: f32,
    steps_per_sweep: u32,
    tick: u32,
    heading: Heading,
}

impl DepthOscillator {
    /// `near > far`, `step > 0`. Starts at `near`, heading outward.
    pub fn new(near: f32, far: f32, step: f32) -> Self {
        let span = near - far;
        let steps_per_sweep = ((span / step).round() as u32).max(1);
        Self {
            near,
            far,
            steps_per_sweep,
            tick: 0,
            heading: Heading::Outward,
        }
    }

    pub fn from_sweep(sweep: &CameraSweep) -> Self {
        Self::new(sweep.near_offset, sweep.far_offset, sweep.step)
    }

    pub fn offset(&self) -> f32 {
        if self.tick == 0 {
            return self.near;
        }
        if self.tick >= self.steps_per_sweep {
            return self.far;
        }
        let t = self.tick as f32 / self.steps_per_sweep as f32;
        (self.near + (self.far - self.near) * t).clamp(self.far, self.near)
    }

    /// Signed increment applied by the next [`advance`](Self::advance).
    pub fn step(&self) -> f32 {
        let magnitude = (self.near - self.far) / self.steps_per_sweep as f32;
        match self.heading {
            Heading::Outward => -magnitude,
            Heading::Inward => magnitude,
        }
    }

    pub fn steps_per_sweep(&self) -> u32 {
        self.steps_per_sweep
    }

    /// Frames for one full near -> far -> near cycle.
    pub fn period(&self) -> u32 {
        self.steps_per_sweep * 2
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.far, self.near)
    }

    /// Apply one step, reversing direction when a boundary is reached.
    pub fn advance(&mut self) -> f32 {
        match self.heading {
            Heading::Outward => {
                self.tick += 1;
                if self.tick >= self.steps_per_sweep {
                    self.tick = self.steps_per_sweep;
                    self.heading = Heading::Inward;
                }
            }
            Heading::Inward => {
                self.tick = self.tick.saturating_sub(1);
                if self.tick == 0 {
                    self.heading = Heading::Outward;
                }
            }
        }
        self.offset()
    }

    /// World moved along z by the current offset.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.offset()))
    }
}

impl Default for DepthOscillator {
    fn default() -> Self {
        Self::from_sweep(&CameraSweep::default())
    }
}

/// Perspective projection rebuilt on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub width: u32,
    pub height: u32,
    pub aspect: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            aspect: width as f32 / height as f32,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_near_and_heads_outward() {
        let cam = DepthOscillator::default();
        assert_eq!(cam.offset(), -5.0);
        assert!(cam.step() < 0.0);
        assert_eq!(cam.step(), -0.003125);
        assert_eq!(cam.steps_per_sweep(), 1600);
    }

    #[test]
    fn offset_stays_in_bounds_and_flips_at_edges() {
        let mut cam = DepthOscillator::default();
        let magnitude = cam.step().abs();
        let mut previous = cam.offset();

        for _ in 0..cam.period() * 3 {
            let step_before = cam.step();
            let offset = cam.advance();

            assert!((-10.0..=-5.0).contains(&offset), "offset {offset} escaped");
            assert!((offset - previous).abs() <= magnitude + 1e-5);

            let at_edge = offset == -10.0 || offset == -5.0;
            let flipped = step_before.signum() != cam.step().signum();
            assert_eq!(at_edge, flipped, "offset {offset}");

            previous = offset;
        }
    }

    #[test]
    fn visits_far_edge_and_returns_with_fixed_period() {
        let mut cam = DepthOscillator::default();
        assert_eq!(cam.period(), 3200);

        let mut offsets = vec![cam.offset()];
        for _ in 0..cam.period() * 2 {
            offsets.push(cam.advance());
        }

        assert_eq!(offsets[1600], -10.0);
        assert_eq!(offsets[3200], -5.0);
        assert_eq!(offsets[4800], -10.0);
        assert_eq!(offsets[6400], -5.0);
        for i in 0..3200 {
            assert_eq!(offsets[i], offsets[i + 3200]);
        }
        assert_eq!(offsets.iter().filter(|&&o| o == -5.0).count(), 3);
    }

    #[test]
    fn custom_sweep_is_honoured() {
        let mut cam = DepthOscillator::new(-2.0, -3.0, 0.25);
        let seq: Vec<f32> = (0..8).map(|_| cam.advance()).collect();
        assert_eq!(seq, vec![-2.25, -2.5, -2.75, -3.0, -2.75, -2.5, -2.25, -2.0]);
    }

    #[test]
    fn view_matrix_translates_by_offset() {
        let cam = DepthOscillator::default();
        let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(origin, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn projection_aspect_is_exact() {
        assert_eq!(Projection::new(800, 400).aspect, 2.0);
        assert_eq!(Projection::new(400, 400).aspect, 1.0);
        assert_eq!(Projection::new(1, 1).aspect, 1.0);
    }

    #[test]
    fn projection_is_invertible() {
        let vp = Projection::new(640, 480).matrix() * DepthOscillator::default().view_matrix();
        let id = vp * vp.inverse();
        assert!(id.abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }
}
