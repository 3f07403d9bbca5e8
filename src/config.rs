use clap::Parser;
use std::net::SocketAddr;

use crate::store::repo::IdStrategy;

/// In-memory user CRUD service over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "user-api", version, about)]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "USER_API_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// How user ids are assigned.
    #[arg(
        long,
        value_enum,
        env = "USER_API_ID_STRATEGY",
        default_value_t = IdStrategy::Sequential
    )]
    pub id_strategy: IdStrategy,
}
