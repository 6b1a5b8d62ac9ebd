//! Host-facing adapter over the policy store.
//!
//! Hosts hand over raw enumerator integers and raw port values; this layer
//! converts them, delegates to `PortRangePolicyStore`, and serializes access
//! with a reader/writer lock so one instance can be shared behind an `Arc`.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{PortScopeError, Result};
use crate::store::PortRangePolicyStore;
use crate::types::{PolicyKey, PortRange, Protocol, Scope};

/// Injectable configuration interface exposing the two port-range operations.
pub trait AllowedPortRangeOptions: Send + Sync {
    /// Set the allowed range for `(scope, protocol)`. `(0, 0)` clears it.
    fn set_allowed_port_range(
        &self,
        scope: i32,
        protocol: i32,
        min_port: i32,
        max_port: i32,
    ) -> Result<()>;

    /// Resolve `(min_port, max_port)` with inheritance from the default scope.
    fn get_effective_allowed_port_range(&self, scope: i32, protocol: i32) -> Result<(i32, i32)>;
}

/// Environment options object carrying the allowed port ranges.
#[derive(Debug, Default)]
pub struct EnvironmentOptions {
    store: RwLock<PortRangePolicyStore>,
}

impl EnvironmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: PortRangePolicyStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Typed write path.
    pub fn set_range(
        &self,
        scope: Scope,
        protocol: Protocol,
        min_port: i32,
        max_port: i32,
    ) -> Result<()> {
        self.write()?.set_range(scope, protocol, min_port, max_port)
    }

    /// Typed read path.
    pub fn effective_range(&self, scope: Scope, protocol: Protocol) -> Result<PortRange> {
        Ok(self.read()?.get_effective_range(scope, protocol))
    }

    pub fn is_port_allowed(&self, scope: Scope, protocol: Protocol, port: u16) -> Result<bool> {
        Ok(self.read()?.is_port_allowed(scope, protocol, port))
    }

    /// Explicit entries sorted by key.
    pub fn snapshot(&self) -> Result<Vec<(PolicyKey, PortRange)>> {
        Ok(self.read()?.entries())
    }

    // Poisoned lock means a writer panicked; surface it instead of panicking again.
    fn read(&self) -> Result<RwLockReadGuard<'_, PortRangePolicyStore>> {
        self.store
            .read()
            .map_err(|_| PortScopeError::Internal("port range lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PortRangePolicyStore>> {
        self.store
            .write()
            .map_err(|_| PortScopeError::Internal("port range lock poisoned".into()))
    }
}

impl AllowedPortRangeOptions for EnvironmentOptions {
    fn set_allowed_port_range(
        &self,
        scope: i32,
        protocol: i32,
        min_port: i32,
        max_port: i32,
    ) -> Result<()> {
        let scope = Scope::try_from(scope)?;
        let protocol = Protocol::try_from(protocol)?;
        self.set_range(scope, protocol, min_port, max_port)
    }

    fn get_effective_allowed_port_range(&self, scope: i32, protocol: i32) -> Result<(i32, i32)> {
        let scope = Scope::try_from(scope)?;
        let protocol = Protocol::try_from(protocol)?;
        Ok(self.effective_range(scope, protocol)?.as_raw())
    }
}
