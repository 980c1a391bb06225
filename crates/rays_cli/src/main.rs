//! Command-line renderer and benchmark harness.

mod report;

use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use rays_core::{Art, Scene};
use rays_renderer::{render_into, Camera, ImageBuffer, SampleRng};
use report::BenchmarkReport;

#[derive(Parser, Debug)]
#[command(name = "rays", about = "ASCII-art sphere path tracer and benchmark")]
struct Args {
    /// Megapixels of the rendered image.
    #[arg(short = 'm', long, default_value_t = 1.0)]
    megapixels: f64,

    /// Times to repeat the benchmark.
    #[arg(short = 't', long, default_value_t = 1)]
    times: usize,

    /// Number of render workers; 0 means one per available CPU.
    #[arg(short = 'p', long, default_value_t = 0)]
    procs: usize,

    /// Output file for the rendered pixel map.
    #[arg(short = 'o', long, default_value = "render.ppm")]
    output: PathBuf,

    /// Result file for the benchmark data.
    #[arg(short = 'r', long, default_value = "result.json")]
    result: PathBuf,

    /// Art file defining the sphere cluster.
    #[arg(short = 'a', long, default_value = "ART")]
    art: PathBuf,

    /// Folder the default art file is looked up in (falls back to the
    /// RAYS_HOME environment variable).
    #[arg(long)]
    home: Option<PathBuf>,

    /// Master seed for the per-worker sample streams.
    #[arg(long, default_value_t = u32::MAX)]
    seed: u32,
}

impl Args {
    /// The default art name is looked up under --home / RAYS_HOME; an
    /// explicit path is used as given.
    fn art_path(&self) -> PathBuf {
        if self.art == Path::new("ART") {
            let home = self
                .home
                .clone()
                .or_else(|| env::var_os("RAYS_HOME").map(PathBuf::from));
            if let Some(home) = home {
                return home.join(&self.art);
            }
        }
        self.art.clone()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let size = (args.megapixels * 1_000_000.0).sqrt() as usize;
    ensure!(size > 0, "megapixels ({}) is too small to render", args.megapixels);

    let workers = if args.procs == 0 {
        thread::available_parallelism().map_or(1, usize::from)
    } else {
        args.procs
    };

    let art_path = args.art_path();
    let art = Art::load(&art_path)?;
    let scene = Scene::from_art(&art);
    log::info!(
        "Loaded {} sphere(s) from {}",
        scene.len(),
        art_path.display()
    );
    log::info!("Will render {} time(s)", args.times);

    let camera = Camera::new(Camera::DEFAULT_DIR, size);
    let mut master = SampleRng::new(args.seed);
    let mut image = ImageBuffer::new(size);
    let mut report = BenchmarkReport::default();

    for pass in 0..args.times {
        log::info!(
            "Starting render #{} of {} MP ({}x{}) with {} worker(s)",
            pass + 1,
            args.megapixels,
            size,
            size,
            workers
        );
        let start = Instant::now();
        render_into(&scene, &camera, &mut image, workers, &mut master)?;
        let elapsed = start.elapsed().as_secs_f64();
        log::info!("Time taken for render {elapsed:.3}s");
        report.push(elapsed);
    }
    log::info!("Average time {:.3}s", report.average());

    let result_file = File::create(&args.result)
        .with_context(|| format!("failed to create {}", args.result.display()))?;
    report
        .write_to(BufWriter::new(result_file))
        .context("failed to write benchmark result")?;

    let output_file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    image
        .write_ppm(BufWriter::new(output_file))
        .context("failed to write pixel map")?;

    Ok(())
}
