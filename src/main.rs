use anyhow::Context;
use raycast::parsing::{self, SceneData};
use raycast::{output, renderer};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "raycast", about = "flat-shaded sphere ray caster")]
struct Opt {
    /// JSON scene description
    #[structopt(long, parse(from_os_str), default_value = "scenes/demo.json")]
    scene: PathBuf,

    /// Output basename; .png and .pbm are written next to each other
    #[structopt(long, default_value = "output/render")]
    output: String,

    /// Worker threads, defaults to the number of logical cpus
    #[structopt(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let scene_data: SceneData = parsing::load_json(&opt.scene)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("failed to load scene {}", opt.scene.display()))?;
    let (camera, scene) = scene_data.build().map_err(|e| anyhow::anyhow!(e))?;

    let film = renderer::render(&camera, &scene);

    let png_filename = format!("{}.png", opt.output);
    let pbm_filename = format!("{}.pbm", opt.output);
    if let Some(parent) = PathBuf::from(&png_filename).parent() {
        std::fs::create_dir_all(parent)?;
    }
    output::write_png(&film, &png_filename)
        .with_context(|| format!("failed to write {}", png_filename))?;
    output::write_pbm(&film, &pbm_filename)
        .with_context(|| format!("failed to write {}", pbm_filename))?;

    println!(
        "rendered {}x{} pixels to {} and {}",
        film.width, film.height, png_filename, pbm_filename
    );
    Ok(())
}
