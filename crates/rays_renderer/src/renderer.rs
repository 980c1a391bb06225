//! Striped parallel render scheduler.
//!
//! Worker `i` of `P` owns rows `{i, i+P, i+2P, ...}`; interleaved
//! striping balances load, since per-row cost varies with how many rays
//! recurse through spheres. Row ownership is disjoint and the scene is
//! read-only, so the only synchronization is the pool's join at the end
//! of the pass.

use rayon::prelude::*;
use thiserror::Error;

use rays_core::Scene;
use rays_math::Vec3;

use crate::camera::Camera;
use crate::image::ImageBuffer;
use crate::rng::SampleRng;
use crate::sampler::sample;

/// Jittered samples accumulated per pixel.
pub const SAMPLES_PER_PIXEL: u32 = 64;
/// Exposure applied to every sample before accumulation.
const EXPOSURE: f64 = 3.5;
/// Base color each pixel accumulator starts from.
const AMBIENT: Vec3 = Vec3::splat(13.0);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// One worker's share of a pass: its RNG stream and the rows it owns.
struct Stripe<'a> {
    rng: SampleRng,
    rows: Vec<(usize, &'a mut [u8])>,
}

impl Stripe<'_> {
    fn render(mut self, scene: &Scene, camera: &Camera, size: usize) {
        for (y, row) in self.rows {
            render_row(scene, camera, size, y, row, &mut self.rng);
        }
    }
}

#[inline]
fn worker_for_row(y: usize, workers: usize) -> usize {
    y % workers
}

/// Render one pass into an existing buffer.
///
/// Spawns a fresh pool of exactly `workers` threads, stripes the rows
/// across it, and returns once every stripe has finished. Per-worker
/// seeds are drawn from `master` strictly in worker-index order before
/// anything is dispatched, so the output depends only on the scene, the
/// size, and the master seed, never on thread scheduling.
pub fn render_into(
    scene: &Scene,
    camera: &Camera,
    image: &mut ImageBuffer,
    workers: usize,
    master: &mut SampleRng,
) -> Result<(), RenderError> {
    assert!(workers > 0, "worker count must be positive");
    let size = image.size();

    let mut stripes: Vec<Stripe> = (0..workers)
        .map(|_| Stripe {
            rng: SampleRng::new(master.next_seed()),
            rows: Vec::new(),
        })
        .collect();

    // Buffer row r holds scene row size-1-r: the image is vertically
    // flipped so the scene's top lands on the first output row.
    let mut buffer_rows: Vec<&mut [u8]> = image.rows_mut().collect();
    buffer_rows.reverse();
    for (y, row) in buffer_rows.into_iter().enumerate() {
        stripes[worker_for_row(y, workers)].rows.push((y, row));
    }

    log::debug!("striping {size} rows across {workers} worker(s)");

    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    pool.install(|| {
        stripes
            .into_par_iter()
            .for_each(|stripe| stripe.render(scene, camera, size));
    });
    Ok(())
}

/// Render one pass into a fresh buffer.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    size: usize,
    workers: usize,
    master: &mut SampleRng,
) -> Result<ImageBuffer, RenderError> {
    let mut image = ImageBuffer::new(size);
    render_into(scene, camera, &mut image, workers, master)?;
    Ok(image)
}

fn render_row(
    scene: &Scene,
    camera: &Camera,
    size: usize,
    y: usize,
    row: &mut [u8],
    rng: &mut SampleRng,
) {
    let mut k = 0;
    for x in (0..size).rev() {
        let mut p = AMBIENT;
        for _ in 0..SAMPLES_PER_PIXEL {
            let ray = camera.sample_ray(x, y, rng);
            p = sample(scene, &ray, rng).scale(EXPOSURE).add(p);
        }
        row[k] = clamp_channel(p.x);
        row[k + 1] = clamp_channel(p.y);
        row[k + 2] = clamp_channel(p.z);
        k += 3;
    }
}

/// Clamp an accumulated channel to one output byte.
#[inline]
fn clamp_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
