//! Server configuration parsed from environment variables.
//!
//! Leptos build options (output name, site root, pkg dir) come from the
//! `LEPTOS_*` variables cargo-leptos sets; this module only covers the bind
//! address overrides.

use std::net::{IpAddr, SocketAddr};

use crate::error::ServeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, overrides the Leptos site address host
    /// - `PORT`: bind port, overrides the Leptos site address port
    pub fn from_env() -> Result<Self, ServeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServeError> {
        Ok(Self {
            host: parse_var("HOST", lookup("HOST"))?,
            port: parse_var("PORT", lookup("PORT"))?,
        })
    }

    /// Address to bind, filling unset parts from `site_addr`.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(site_addr.ip()), self.port.unwrap_or(site_addr.port()))
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ServeError> {
    let Some(value) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    value
        .parse()
        .map(Some)
        .map_err(|_| ServeError::InvalidEnv { var, value })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
