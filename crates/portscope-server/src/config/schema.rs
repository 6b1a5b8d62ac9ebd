use std::collections::HashSet;
use std::net::SocketAddr;

use portscope_core::error::{PortScopeError, Result};
use portscope_core::{PolicyKey, PortRange, Protocol, Scope};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    /// Ranges applied to the store at startup.
    #[serde(default)]
    pub port_ranges: Vec<PortRangeEntry>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PortScopeError::UnsupportedVersion);
        }

        self.server.validate()?;

        let mut seen = HashSet::new();
        for entry in &self.port_ranges {
            entry.validate()?;
            if !seen.insert(entry.key()) {
                return Err(PortScopeError::InvalidArgument(format!(
                    "port_ranges has duplicate entry for {}",
                    entry.key()
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PortScopeError::InvalidArgument(format!(
                "server.listen must be a socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:8090".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortRangeEntry {
    pub scope: Scope,
    pub protocol: Protocol,
    pub min: i32,
    pub max: i32,
}

impl PortRangeEntry {
    pub fn key(&self) -> PolicyKey {
        PolicyKey::new(self.scope, self.protocol)
    }

    pub fn validate(&self) -> Result<()> {
        PortRange::new(self.min, self.max).map(|_| ()).map_err(|e| {
            PortScopeError::InvalidArgument(format!("port_ranges[{}]: {e}", self.key()))
        })
    }
}
