//! Fixed camera basis and primary-ray generation.

use rays_math::{Ray, Vec3};

use crate::rng::SampleRng;

/// Lens-basis vectors are this long; the jitter below is expressed in
/// multiples of it.
const BASIS_SCALE: f64 = 0.002;
/// Aperture width of the lens jitter, in basis units.
const APERTURE: f64 = 99.0;
/// Focal scale applied to the per-pixel offset.
const FOCAL: f64 = 16.0;
/// Eye offset pulls the basis back to the viewport center.
const EYE_PULLBACK: f64 = -256.0;
/// Base point all primary rays start from, before lens jitter.
const ORIGIN: Vec3 = Vec3::new(-5.0, 16.0, 8.0);
/// Pixel coordinates are expressed relative to a 512-wide reference
/// image, whatever the rendered size.
const REFERENCE_SIZE: f64 = 512.0;

/// Camera basis shared by all workers for one render.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    up: Vec3,
    right: Vec3,
    eye_offset: Vec3,
    pixel_scale: f64,
}

impl Camera {
    /// Stock view direction framing the default art.
    pub const DEFAULT_DIR: Vec3 = Vec3::new(-3.1, -16.0, 1.9);

    /// Build the basis for a view direction and a square image side.
    pub fn new(dir: Vec3, size: usize) -> Self {
        let dir = dir.normalize();
        let up = Vec3::new(0.0, 0.0, 1.0).cross(dir).normalize().scale(BASIS_SCALE);
        let right = dir.cross(up).normalize().scale(BASIS_SCALE);
        let eye_offset = up.add(right).scale(EYE_PULLBACK).add(dir);
        Self {
            up,
            right,
            eye_offset,
            pixel_scale: REFERENCE_SIZE / size as f64,
        }
    }

    /// Build one jittered primary ray for pixel (x, y).
    ///
    /// Draws four samples: two shift the origin across the lens basis
    /// (depth of field), two jitter the sub-pixel position
    /// (antialiasing). The returned direction is normalized.
    pub fn sample_ray(&self, x: usize, y: usize, rng: &mut SampleRng) -> Ray {
        let lens = self
            .up
            .scale(rng.next_f64() - 0.5)
            .scale(APERTURE)
            .add(self.right.scale(rng.next_f64() - 0.5).scale(APERTURE));
        let origin = ORIGIN.add(lens);
        let dir = lens
            .scale(-1.0)
            .add(
                self.up
                    .scale(rng.next_f64() + x as f64 * self.pixel_scale)
                    .add(self.right.scale(rng.next_f64() + y as f64 * self.pixel_scale))
                    .add(self.eye_offset)
                    .scale(FOCAL),
            )
            .normalize();
        Ray::new(origin, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthogonal() {
        let cam = Camera::new(Camera::DEFAULT_DIR, 512);
        let dir = Camera::DEFAULT_DIR.normalize();

        assert!(cam.up.dot(dir).abs() < 1e-12);
        assert!(cam.right.dot(dir).abs() < 1e-12);
        assert!(cam.up.dot(cam.right).abs() < 1e-12);
        assert!((cam.up.length() - BASIS_SCALE).abs() < 1e-12);
        assert!((cam.right.length() - BASIS_SCALE).abs() < 1e-12);
    }

    #[test]
    fn pixel_scale_tracks_image_size() {
        assert_eq!(Camera::new(Camera::DEFAULT_DIR, 512).pixel_scale, 1.0);
        assert_eq!(Camera::new(Camera::DEFAULT_DIR, 1024).pixel_scale, 0.5);
    }

    #[test]
    fn sample_ray_is_normalized_and_deterministic() {
        let cam = Camera::new(Camera::DEFAULT_DIR, 256);

        let mut a = SampleRng::new(7);
        let mut b = SampleRng::new(7);
        let ra = cam.sample_ray(10, 20, &mut a);
        let rb = cam.sample_ray(10, 20, &mut b);

        assert_eq!(ra, rb);
        assert!((ra.direction().length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sample_ray_consumes_four_draws() {
        let cam = Camera::new(Camera::DEFAULT_DIR, 256);
        let mut rng = SampleRng::new(7);
        let mut reference = SampleRng::new(7);

        cam.sample_ray(0, 0, &mut rng);
        for _ in 0..4 {
            reference.next_f64();
        }
        assert_eq!(rng, reference);
    }
}
