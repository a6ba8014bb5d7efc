//! Ring tower scene generator
//!
//! Stacks alternating heavy and light rings of blocks on a plane and writes them to a
//! scene XML file.
//!
//! Usage:
//!     dense_tower [OPTIONS]
//!
//! Options:
//!     -o, --output <FILE>     Output XML file (default: scenes3D/denseTower25.xml)
//!     -c, --config <FILE>     JSON scene config; missing fields use stock values
//!     --seed <SEED>           Seed for block colors (default: random)
//!     -h, --help              Show this help message

mod common;

use bodyscene::generation::{DenseTowerConfig, dense_tower, load_sync, scene_rng};
use bodyscene::scene::export;

use common::{Args, SceneCli};

const CLI: SceneCli = SceneCli {
    name: "dense_tower",
    about: "Ring tower scene generator",
    default_output: "scenes3D/denseTower25.xml",
    seeded: "block colors",
    example: "dense_tower --seed 7 -c tower.json",
};

fn run(args: Args) -> bodyscene::core::Result<()> {
    let mut config: DenseTowerConfig = match &args.config {
        Some(path) => load_sync(path)?,
        None => DenseTowerConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    let mut rng = scene_rng(config.seed);
    let doc = dense_tower::build(&config, &mut rng)?;
    export(&doc, &config.output)
}

fn main() {
    CLI.main(run);
}
