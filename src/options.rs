//! Parsing Options.
//! `--policy {all-pairs|bridging}` or `-p`, `--alphabet {zero-based|one-based}` or `-a`

use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::config::RoadConfig;
use crate::network::{EdgePolicy, ReconstructOptions};
use crate::parse::CostAlphabet;

fn make_options_parser() -> clap::Command {
    let parser = Command::new("roadnet")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Minimum-cost road network reconstruction")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the network from FILE (.json/.ron or a text line) instead of stdin"),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .help("Candidate edge policy")
                .value_parser(["all-pairs", "bridging"]),
        )
        .arg(
            Arg::new("alphabet")
                .short('a')
                .long("alphabet")
                .help("Cost letter decoding")
                .value_parser(["zero-based", "one-based"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("roadnet.toml"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the reconstruction report will be stored"),
        )
        .arg(
            Arg::new("viz")
                .long("viz")
                .value_name("FILE")
                .help("Write a Graphviz rendering of the rebuilt network"),
        )
        .arg(
            Arg::new("no-early-stop")
                .long("no-early-stop")
                .action(ArgAction::SetTrue)
                .help("Scan every candidate edge even once the network is connected"),
        );
    parser
}

#[derive(Debug, Default)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub policy: Option<EdgePolicy>,
    pub alphabet: Option<CostAlphabet>,
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub viz: Option<PathBuf>,
    pub no_early_stop: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let policy = match matches.get_one::<String>("policy").map(String::as_str) {
            None => None,
            Some("all-pairs") => Some(EdgePolicy::AllPairs),
            Some("bridging") => Some(EdgePolicy::ComponentBridging),
            Some(other) => return Err(anyhow!("UnsupportedPolicy: {other}")),
        };

        let alphabet = match matches.get_one::<String>("alphabet") {
            None => None,
            Some(name) => Some(
                CostAlphabet::from_name(name)
                    .ok_or_else(|| anyhow!("UnsupportedAlphabet: {name}"))?,
            ),
        };

        let path = |id: &str| matches.get_one::<String>(id).map(PathBuf::from);

        Ok(Options {
            input: path("input"),
            policy,
            alphabet,
            config: path("config").unwrap_or_else(|| PathBuf::from("roadnet.toml")),
            output: path("output"),
            viz: path("viz"),
            no_early_stop: matches.get_flag("no-early-stop"),
        })
    }

    /// Flags win over the config file.
    pub fn alphabet(&self, config: &RoadConfig) -> CostAlphabet {
        self.alphabet.unwrap_or(config.alphabet)
    }

    pub fn reconstruct_options(&self, config: &RoadConfig) -> ReconstructOptions {
        ReconstructOptions {
            policy: self.policy.unwrap_or(config.policy),
            early_stop: config.early_stop && !self.no_early_stop,
            observer: None,
        }
    }
}
