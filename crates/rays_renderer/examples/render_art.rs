//! Render a small silhouette and save it as a PPM.

use std::fs::File;
use std::io::BufWriter;

use rays_core::{Art, Scene};
use rays_renderer::{render, Camera, SampleRng};

fn main() {
    let art = Art::from_lines([
        " 11 ",
        "1  1",
        "1111",
        "1  1",
    ]);
    let scene = Scene::from_art(&art);
    println!("Scene has {} sphere(s)", scene.len());

    let size = 256;
    let camera = Camera::new(Camera::DEFAULT_DIR, size);
    let mut master = SampleRng::new(u32::MAX);

    let start = std::time::Instant::now();
    let image = render(&scene, &camera, size, 4, &mut master).expect("render failed");
    println!("Rendered {size}x{size} in {:?}", start.elapsed());

    let file = File::create("render_art.ppm").expect("failed to create output file");
    image
        .write_ppm(BufWriter::new(file))
        .expect("failed to write pixel map");
    println!("Saved to render_art.ppm");
}
