//! Service configuration from command-line flags and environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Default tracing filter when neither `RUST_LOG` nor `--log` is given.
pub const DEFAULT_LOG_FILTER: &str = "campus_crud=info,tower_http=info";

#[derive(Debug, Clone, Parser)]
#[command(name = "campus-crud", version, about = "Role-gated CRUD API over campus records")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "CAMPUS_CRUD_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database file; records are kept in memory when omitted
    #[arg(long, env = "CAMPUS_CRUD_DATABASE")]
    pub database: Option<PathBuf>,

    /// Tracing filter directives, overridden by RUST_LOG
    #[arg(long = "log", env = "CAMPUS_CRUD_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
