// src/config/mod.rs
// Server configuration, built once at startup and handed to the router

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the calculator listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 5000;

/// Max request body size for /calculate (16KB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    // ── Listener
    pub host: IpAddr,
    pub port: u16,

    // ── Request limits
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL shown to the user at startup. Wildcard binds are reported as localhost.
    pub fn display_url(&self) -> String {
        let host = if self.host.is_unspecified() {
            "127.0.0.1".to_string()
        } else {
            self.host.to_string()
        };
        format!("http://{}:{}", host, self.port)
    }
}
