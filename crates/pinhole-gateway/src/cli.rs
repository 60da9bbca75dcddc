use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "PINHOLE_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "PINHOLE_PUBLIC_BASE_URL";
pub const CACHE_DURATION_HOURS_ENV: &str = "PINHOLE_CACHE_DURATION_HOURS";
pub const CACHE_CAPACITY_ENV: &str = "PINHOLE_CACHE_CAPACITY";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "pinhole-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base origin used to build externally visible short URLs.
    #[arg(
        long,
        env = PUBLIC_BASE_URL_ENV,
        default_value = DEFAULT_PUBLIC_BASE_URL,
    )]
    pub public_base_url: String,

    /// Lookup cache entry lifetime, in hours.
    #[arg(long, env = CACHE_DURATION_HOURS_ENV, default_value_t = 24)]
    pub cache_duration_hours: u64,

    /// Maximum number of entries the lookup cache holds.
    #[arg(long, env = CACHE_CAPACITY_ENV, default_value_t = 10_000)]
    pub cache_capacity: u64,
}
