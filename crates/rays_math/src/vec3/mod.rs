//! Immutable 3-component `f64` vector.
//!
//! Two interchangeable backends implement the same inherent API, picked
//! at build time: the dependency-free scalar backend (default) and a
//! backend that routes arithmetic through `glam::DVec3` (feature
//! `glam`). Both run the identical IEEE operations in the identical
//! order, so a render produces the same bytes under either.
//!
//! All operations are pure and total. Normalizing a zero-length vector
//! yields non-finite components by IEEE rules; callers are expected
//! never to hand one in.

#[cfg(not(feature = "glam"))]
mod scalar;
#[cfg(not(feature = "glam"))]
pub use scalar::Vec3;

#[cfg(feature = "glam")]
mod wide;
#[cfg(feature = "glam")]
pub use wide::Vec3;

#[cfg(test)]
mod tests {
    use super::Vec3;

    const EPS: f64 = 1e-12;

    #[test]
    fn add_sub_scale_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a.add(b), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b.sub(a), Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a.scale(2.0), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn sub_matches_add_of_negation() {
        let a = Vec3::new(0.3, -7.25, 1e9);
        let b = Vec3::new(-2.5, 6.125, 0.1);
        assert_eq!(a.sub(b), a.add(b.scale(-1.0)));
    }

    #[test]
    fn dot_and_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        // Cross product is orthogonal to both inputs.
        assert!(c.dot(a).abs() < EPS);
        assert!(c.dot(b).abs() < EPS);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-3.1, -16.0, 1.9),
            Vec3::new(0.0, 0.0, 42.0),
            Vec3::new(1e-3, -1e6, 7.0),
        ] {
            assert!((v.normalize().length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn splat_fills_all_lanes() {
        assert_eq!(Vec3::splat(13.0), Vec3::new(13.0, 13.0, 13.0));
    }
}
