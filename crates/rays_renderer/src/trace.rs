//! Ray/scene intersection.

use rays_core::Scene;
use rays_math::{Ray, Vec3};

/// Self-intersection guard: candidates at or below this distance are
/// rejected.
const MIN_T: f64 = 0.01;

/// Classification of the nearest thing a ray meets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// No geometry; the ray escapes upward.
    Sky,
    /// The ground plane at z = 0.
    Floor { t: f64, normal: Vec3 },
    /// The nearest sphere along the ray.
    Sphere { t: f64, normal: Vec3 },
}

impl Hit {
    /// True when the ray reached the sky unobstructed.
    #[inline]
    pub fn is_sky(&self) -> bool {
        matches!(self, Hit::Sky)
    }
}

enum Candidate {
    Sky,
    Floor,
    Sphere,
}

/// Resolve a ray against the floor plane and every sphere in the scene.
///
/// Precedence is strictly nearest-first, sphere over floor over sky.
/// Non-finite or too-near candidates are discarded rather than compared,
/// so a direction with a zero z-component can never produce a floor hit.
pub fn intersect(scene: &Scene, ray: &Ray) -> Hit {
    let origin = ray.origin();
    let dir = ray.direction();

    let mut nearest = f64::INFINITY;
    let mut best = Candidate::Sky;

    let floor_t = -origin.z / dir.z;
    if floor_t.is_finite() && floor_t > MIN_T {
        nearest = floor_t;
        best = Candidate::Floor;
    }

    // Normal computation is deferred to the winning sphere; only its p
    // vector is kept.
    let mut sphere_p = Vec3::ZERO;
    for &center in scene.centers() {
        let p = origin.sub(center);
        let b = p.dot(dir);
        let c = p.dot(p) - 1.0;
        let disc = b * b - c;
        if disc > 0.0 {
            let s = -b - disc.sqrt();
            if s > MIN_T && s < nearest {
                nearest = s;
                sphere_p = p;
                best = Candidate::Sphere;
            }
        }
    }

    match best {
        Candidate::Sky => Hit::Sky,
        Candidate::Floor => Hit::Floor {
            t: nearest,
            normal: Vec3::new(0.0, 0.0, 1.0),
        },
        Candidate::Sphere => Hit::Sphere {
            t: nearest,
            normal: sphere_p.add(dir.scale(nearest)).normalize(),
        },
    }
}
