//! Chariot and torsos scene generator
//!
//! Writes a ground plane, a grid of torso meshes, a wheeled chariot and a bookcase
//! full of books to a scene XML file.
//!
//! Usage:
//!     chariot_venus [OPTIONS]
//!
//! Options:
//!     -o, --output <FILE>     Output XML file (default: ../chariotvenus.xml)
//!     -c, --config <FILE>     JSON scene config; missing fields use stock values
//!     --seed <SEED>           Seed for book colors (default: random)
//!     -h, --help              Show this help message

mod common;

use std::time::Instant;

use bodyscene::generation::{ChariotVenusConfig, chariot_venus, load_sync, scene_rng};
use bodyscene::scene::export;

use common::{Args, SceneCli};

const CLI: SceneCli = SceneCli {
    name: "chariot_venus",
    about: "Chariot and torsos scene generator",
    default_output: "../chariotvenus.xml",
    seeded: "book colors",
    example: "chariot_venus --seed 42 -o scenes/chariot.xml",
};

fn run(args: Args) -> bodyscene::core::Result<()> {
    let mut config: ChariotVenusConfig = match &args.config {
        Some(path) => load_sync(path)?,
        None => ChariotVenusConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    let start = Instant::now();
    let mut rng = scene_rng(config.seed);
    let doc = chariot_venus::build(&config, &mut rng)?;
    export(&doc, &config.output)?;
    log::info!("Done in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

fn main() {
    CLI.main(run);
}
