//! CPU path tracer for ASCII-art sphere scenes.
//!
//! The pipeline: a [`Camera`] turns pixel coordinates plus RNG jitter
//! into primary rays, [`sample`] recursively integrates light transport
//! per ray, [`intersect`] resolves rays against the sphere cluster and
//! the floor plane, and [`render_into`] stripes image rows across a
//! fixed worker pool. All randomness flows through [`SampleRng`], whose
//! per-worker streams are seeded from one master stream so renders are
//! reproducible.

mod camera;
mod image;
mod renderer;
mod rng;
mod sampler;
mod trace;

pub use camera::Camera;
pub use image::ImageBuffer;
pub use renderer::{render, render_into, RenderError, SAMPLES_PER_PIXEL};
pub use rng::SampleRng;
pub use sampler::{reflect, sample};
pub use trace::{intersect, Hit};

/// Re-export the math types used in this crate's public API.
pub use rays_math::{Ray, Vec3};
