//! Command line and environment configuration.

use crate::output::DEFAULT_SPLIT_PREFIX_LEN;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Format of the final network list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One CIDR per line.
    #[default]
    Text,
    /// A JSON array of CIDR strings.
    Json,
}

/// Reduce a list of IPv4/IPv6 networks to the minimal equivalent set.
///
/// Each network must be on its own line and in CIDR format. Subnets of other
/// listed networks are dropped and sibling pairs are merged into their parent.
#[derive(Parser, Debug, Clone)]
#[command(name = "supernets", version, about, long_about = None)]
pub struct Config {
    /// File with one network per line. Reads standard input when omitted or `-`.
    #[arg(value_name = "SUBNET_FILE")]
    pub subnet_file: Option<PathBuf>,

    /// Split surviving networks shorter than this prefix length on output.
    #[arg(short = 'm', long = "maxprefixlen", env = "SUPERNETS_MAX_PREFIX_LEN")]
    pub max_prefix_len: Option<u8>,

    /// Prefix length of the pieces produced when splitting.
    #[arg(
        short = 's',
        long = "split-prefix-len",
        env = "SUPERNETS_SPLIT_PREFIX_LEN",
        default_value_t = DEFAULT_SPLIT_PREFIX_LEN
    )]
    pub split_prefix_len: u8,

    /// Output format.
    #[arg(short, long, value_enum, env = "SUPERNETS_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print every aggregation step.
    #[arg(short, long)]
    pub verbose: bool,

    /// log4rs configuration file; a stderr logger is used when it does not exist.
    #[arg(long, env = "SUPERNETS_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

impl Config {
    /// The input file, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.subnet_file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subnet_file: None,
            max_prefix_len: None,
            split_prefix_len: DEFAULT_SPLIT_PREFIX_LEN,
            format: OutputFormat::Text,
            verbose: false,
            log_config: PathBuf::from("log4rs.yml"),
        }
    }
}
