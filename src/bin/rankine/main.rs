mod config;
mod error;
mod report;
mod svg;

use std::{fs, path::Path, path::PathBuf};

use clap::{Parser, Subcommand};
use rankine_models::{
    models::power::rankine::{CycleDiagram, CycleResult, ReheatRankine, SuperheatRankine},
    support::steam::If97,
};
use tracing::info;
use twine_core::Model;

use config::Config;
use error::{CliError, CliResult};
use report::Report;

#[derive(Parser)]
#[command(name = "rankine")]
#[command(about = "Ideal steam Rankine cycle analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the saturated/superheated cycle
    Superheat(RunArgs),
    /// Analyze the supercritical single-reheat cycle
    Reheat(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// YAML file overriding the default boundary and diagram settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the T-s diagram to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Superheat(args) => cmd_superheat(&args),
        Commands::Reheat(args) => cmd_reheat(&args),
    }
}

fn cmd_superheat(args: &RunArgs) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let result = SuperheatRankine::new(If97).call(&config.superheat.into())?;

    println!("Rankine superheat cycle analysis");
    present(&result, &config, args.svg.as_deref())
}

fn cmd_reheat(args: &RunArgs) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let result = ReheatRankine::new(If97).call(&config.reheat.into())?;

    println!("Rankine supercritical reheat cycle analysis");
    present(&result, &config, args.svg.as_deref())
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn present(result: &CycleResult, config: &Config, svg_path: Option<&Path>) -> CliResult<()> {
    let diagram = CycleDiagram::new(If97, config.diagram.to_diagram_config()?).call(result)?;

    print!("{}", Report::new(result, &diagram.path));

    if let Some(path) = svg_path {
        fs::write(path, svg::render(&diagram)?).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "wrote T-s diagram");
        println!("\nT-s diagram written to {}", path.display());
    }

    Ok(())
}
