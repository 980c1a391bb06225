//! Math primitives for the rays renderer.
//!
//! Provides the `Vec3` value type used throughout the tracer and the
//! `Ray` it shoots. `Vec3` has two build-selected backends (scalar and
//! glam-delegating) exposing one contract; see the `vec3` module.

mod ray;
mod vec3;

pub use ray::Ray;
pub use vec3::Vec3;
