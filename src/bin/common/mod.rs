//! Argument parsing shared by the scene generator binaries.

use std::env;
use std::path::PathBuf;

/// Help text and defaults for one generator binary.
pub struct SceneCli {
    pub name: &'static str,
    pub about: &'static str,
    pub default_output: &'static str,
    /// What `--seed` controls, e.g. "book colors".
    pub seeded: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Default)]
pub struct Args {
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl SceneCli {
    pub fn print_help(&self) {
        eprintln!("{} - {}", self.name, self.about);
        eprintln!();
        eprintln!("Usage: {} [OPTIONS]", self.name);
        eprintln!();
        eprintln!("Options:");
        eprintln!("    -o, --output <FILE>     Output XML file (default: {})", self.default_output);
        eprintln!("    -c, --config <FILE>     JSON scene config; missing fields use stock values");
        eprintln!("    --seed <SEED>           Seed for {} (default: random)", self.seeded);
        eprintln!("    -h, --help              Show this help message");
        eprintln!();
        eprintln!("Example:");
        eprintln!("    {}", self.example);
    }

    pub fn parse_args(&self) -> Result<Args, String> {
        let args: Vec<String> = env::args().skip(1).collect();
        let mut parsed = Args::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => {
                    self.print_help();
                    std::process::exit(0);
                }
                "-o" | "--output" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --output")?;
                    parsed.output = Some(PathBuf::from(value));
                }
                "-c" | "--config" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --config")?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--seed" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --seed")?;
                    parsed.seed = Some(value.parse().map_err(|_| format!("Invalid seed: {}", value))?);
                }
                other => return Err(format!("Unknown option: {}", other)),
            }
            i += 1;
        }

        Ok(parsed)
    }

    /// Initialize logging, parse arguments and call `run`, exiting with status 1 on
    /// any error.
    pub fn main(&self, run: impl FnOnce(Args) -> bodyscene::core::Result<()>) {
        bodyscene::core::logging::init();

        let args = match self.parse_args() {
            Ok(args) => args,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                self.print_help();
                std::process::exit(1);
            }
        };

        if let Err(e) = run(args) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
