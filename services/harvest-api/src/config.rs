//! Service configuration: command line, environment and optional YAML file.
//!
//! Precedence per setting is flag/environment, then the YAML report file,
//! then built-in defaults.

use anyhow::{bail, Context, Result};
use clap::Parser;
use harvest_report::{report_year_from_path, IngestOptions};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Report read when no path is configured.
pub const DEFAULT_DATA_PATH: &str = "./huntData/CO2017.csv";

/// Animal whose section titles are recognized by default.
pub const DEFAULT_ANIMAL: &str = "elk";

/// Report year used when neither configuration nor file name gives one.
pub const DEFAULT_YEAR: i32 = 2017;

/// Harvest API Server
#[derive(Parser, Debug, Clone)]
#[command(name = "harvest-api")]
#[command(about = "Read-only HTTP API over a wildlife harvest report")]
pub struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "HARVEST_LISTEN_ADDR")]
    pub listen: String,

    /// Harvest report CSV file
    #[arg(short, long, env = "HARVEST_DATA_PATH")]
    pub data: Option<PathBuf>,

    /// Animal named in section titles (e.g. "elk")
    #[arg(long, env = "HARVEST_ANIMAL")]
    pub animal: Option<String>,

    /// Report year named in section titles
    #[arg(long, env = "HARVEST_YEAR")]
    pub year: Option<i32>,

    /// YAML report configuration file
    #[arg(short, long, env = "HARVEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Prometheus exporter listen address (disabled when unset)
    #[arg(long, env = "HARVEST_METRICS_ADDR")]
    pub metrics_listen: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Number of worker threads
    #[arg(long, env = "HARVEST_WORKER_THREADS")]
    pub worker_threads: Option<usize>,
}

/// Report settings as read from a YAML file.
///
/// ```yaml
/// path: ./huntData/CO2017.csv
/// animal: elk
/// year: 2017
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFileConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub animal: Option<String>,

    #[serde(default)]
    pub year: Option<i32>,
}

impl ReportFileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Failed to parse: {:?}", path))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Which report to ingest and how to recognize its sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSource {
    pub path: PathBuf,
    pub options: IngestOptions,
}

/// Fully resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen: SocketAddr,
    pub metrics_listen: Option<SocketAddr>,
    pub report: ReportSource,
}

impl ServiceConfig {
    /// Resolve arguments, the optional YAML file and defaults.
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => ReportFileConfig::from_file(path)?,
            None => ReportFileConfig::default(),
        };

        let path = args
            .data
            .clone()
            .or(file.path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let animal = args
            .animal
            .clone()
            .or(file.animal)
            .unwrap_or_else(|| DEFAULT_ANIMAL.to_string());
        if animal.trim().is_empty() {
            bail!("Animal name must not be empty");
        }

        let year = args
            .year
            .or(file.year)
            .or_else(|| report_year_from_path(&path))
            .unwrap_or(DEFAULT_YEAR);

        let listen = args
            .listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", args.listen))?;

        let metrics_listen = args
            .metrics_listen
            .as_deref()
            .map(|addr| {
                addr.parse()
                    .with_context(|| format!("Invalid metrics listen address: {}", addr))
            })
            .transpose()?;

        Ok(Self {
            listen,
            metrics_listen,
            report: ReportSource {
                path,
                options: IngestOptions::new(animal, year),
            },
        })
    }
}
