//! Server Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Listener settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind
    #[arg(
        short = 'H',
        long,
        env = "SERVER_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
