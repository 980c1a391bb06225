//! Recursive Monte Carlo light-transport sampler.

use rays_core::Scene;
use rays_math::{Ray, Vec3};

use crate::rng::SampleRng;
use crate::trace::{intersect, Hit};

/// Bounce limit for the recursive chain. Each bounce attenuates by half,
/// so contributions past this depth are below output quantization.
const MAX_BOUNCES: u32 = 16;

/// Light position before the per-sample x/y jitter.
const LIGHT: Vec3 = Vec3::new(9.0, 9.0, 16.0);

/// Checkerboard floor colors, even and odd cells.
const FLOOR_EVEN: Vec3 = Vec3::new(3.0, 3.0, 3.0);
const FLOOR_ODD: Vec3 = Vec3::new(3.0, 1.0, 1.0);

/// Compute one pixel sample's color contribution for a primary ray.
///
/// Consumes two RNG draws per invocation (the soft-shadow light jitter)
/// plus whatever the recursive bounce chain draws. Sky returns the
/// linear gradient `(1,1,1) * (1 - dir.z)`; the floor terminates the
/// chain with the shaded checkerboard; a sphere adds its specular term
/// and recurses along the mirror reflection at half weight.
pub fn sample(scene: &Scene, ray: &Ray, rng: &mut SampleRng) -> Vec3 {
    sample_bounded(scene, ray, rng, MAX_BOUNCES)
}

fn sample_bounded(scene: &Scene, ray: &Ray, rng: &mut SampleRng, bounces_left: u32) -> Vec3 {
    let dir = ray.direction();

    let (t, normal, on_floor) = match intersect(scene, ray) {
        Hit::Sky => return Vec3::splat(1.0).scale(1.0 - dir.z),
        Hit::Floor { t, normal } => (t, normal, true),
        Hit::Sphere { t, normal } => (t, normal, false),
    };

    let h = ray.at(t);
    // Light direction with jitter for soft shadows.
    let l = Vec3::new(LIGHT.x + rng.next_f64(), LIGHT.y + rng.next_f64(), LIGHT.z)
        .sub(h)
        .normalize();

    // Lambertian term, zeroed when facing away or shadowed. The same
    // gate scales the specular base.
    let mut b = l.dot(normal);
    let mut gate = 1.0;
    if b < 0.0 || !intersect(scene, &Ray::new(h, l)).is_sky() {
        b = 0.0;
        gate = 0.0;
    }

    if on_floor {
        let h = h.scale(0.2);
        let fc = if (h.x.ceil() + h.y.ceil()) as i64 & 1 == 1 {
            FLOOR_ODD
        } else {
            FLOOR_EVEN
        };
        return fc.scale(b * 0.2 + 0.1);
    }

    let r = reflect(dir, normal);
    let specular = Vec3::splat(pow99(l.dot(r.scale(gate))));
    if bounces_left == 0 {
        return specular;
    }
    specular.add(sample_bounded(scene, &Ray::new(h, r), rng, bounces_left - 1).scale(0.5))
}

/// Mirror reflection of `dir` about unit `normal`.
#[inline]
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    dir.sub(normal.scale(2.0 * normal.dot(dir)))
}

/// x^99 through a fixed squaring chain (x^33 cubed), so every build
/// evaluates the same multiply order.
#[inline]
fn pow99(x: f64) -> f64 {
    let mut p = x * x; // x^2
    p *= p; // x^4
    p *= p; // x^8
    p *= p; // x^16
    p *= p; // x^32
    p *= x; // x^33
    p * p * p
}
