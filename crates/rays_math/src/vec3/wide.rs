use glam::DVec3;

/// `Vec3` backend delegating arithmetic to `glam::DVec3`.
///
/// Same field layout and API as the scalar backend. glam's SIMD-
/// specialized storage is `f32`-only, so delegation stays on the plain
/// `f64` path and results match the scalar backend bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    fn from_glam(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() + rhs.to_glam())
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() - rhs.to_glam())
    }

    #[inline]
    pub fn scale(self, by: f64) -> Self {
        Self::from_glam(self.to_glam() * by)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.to_glam().dot(rhs.to_glam())
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam().cross(rhs.to_glam()))
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.to_glam().length()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }
}
