use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line flags. Anything given here wins over the config file.
#[derive(Debug, Parser)]
#[command(name = "pg_finder", about = "Search PG / hostel listings near colleges")]
pub struct Cli {
    /// Optional TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Listings CSV
    #[arg(short, long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(short, long)]
    pub addr: Option<String>,

    #[arg(short, long)]
    pub workers: Option<usize>,

    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub bind_addr: String,
    pub max_workers: usize,
    /// Load the dataset at startup instead of on the first search.
    pub preload: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("pg_data_tamilnadu_colleges_updated_10000.csv"),
            bind_addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            preload: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Defaults, then the config file (if any), then CLI flags.
    pub fn resolve(cli: Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        if let Some(data) = cli.data {
            config.data_path = data;
        }
        if let Some(addr) = cli.addr {
            config.bind_addr = addr;
        }
        if let Some(workers) = cli.workers {
            config.max_workers = workers;
        }
        if let Some(level) = cli.log_level {
            config.log_level = level;
        }

        Ok(config)
    }
}
