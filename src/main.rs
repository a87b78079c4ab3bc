use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;

use roadnet::config::RoadConfig;
use roadnet::graph::NetworkGraph;
use roadnet::network::io::{self, Format};
use roadnet::network::{RoadNetwork, reconstruct};
use roadnet::options::Options;
use roadnet::parse::{CostAlphabet, parse_network};
use roadnet::report::ReconstructionReport;

fn main() {
    if std::env::var("ROADNET_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("ROADNET_LOG")
            .write_style("ROADNET_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    if let Err(err) = run() {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut flags = shellwords::split(&std::env::var("ROADNET_FLAGS").unwrap_or_default())
        .context("ROADNET_FLAGS has mismatched quotes")?;
    flags.extend(std::env::args().skip(1));

    let options = Options::parse_from_args(&flags)?;
    debug!("roadnet options: {:?}", options);

    let config = RoadConfig::load_from_file(&options.config)?;
    debug!("roadnet config: {:?}", config);

    let network = load_network(options.input.as_deref(), options.alphabet(&config))?;
    let reconstruct_options = options.reconstruct_options(&config);
    let policy = reconstruct_options.policy;

    let started = Instant::now();
    let reconstruction = reconstruct(&network, reconstruct_options);
    let elapsed = started.elapsed();

    log::info!(
        "{} cities, {} components, total cost {} in {:?}",
        network.cities(),
        reconstruction.components.len(),
        reconstruction.total_cost(),
        elapsed
    );
    println!("{}", reconstruction.total_cost());

    if let Some(output) = &options.output {
        let report = ReconstructionReport::new(
            "roadnet".to_string(),
            network.cities(),
            policy,
            &reconstruction,
            elapsed,
        );
        report
            .save_to_file(output)
            .with_context(|| format!("Failed to write report: {:?}", output))?;
    }

    if let Some(viz) = &options.viz {
        NetworkGraph::from_reconstruction(network.cities(), &reconstruction)
            .write_dot(viz)
            .with_context(|| format!("Failed to write graph: {:?}", viz))?;
    }

    Ok(())
}

fn load_network(input: Option<&Path>, alphabet: CostAlphabet) -> Result<RoadNetwork> {
    let line = match input {
        Some(path) => {
            if let Some(format) = Format::from_path(path) {
                return io::read_network(path, format)
                    .with_context(|| format!("Failed to load network: {:?}", path));
            }
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {:?}", path))?;
            content.lines().next().unwrap_or_default().to_string()
        }
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read input line")?;
            line
        }
    };
    Ok(parse_network(&line, alphabet)?)
}
