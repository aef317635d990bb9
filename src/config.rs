use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "chirpy", version, about = "Chirpy web server")]
pub struct Config {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Directory served under /app
    #[arg(long, default_value = ".")]
    pub file_root: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Configuration with defaults, serving files from `file_root`
    pub fn with_file_root(file_root: impl Into<PathBuf>) -> Self {
        Self {
            file_root: file_root.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["chirpy"])
    }
}
