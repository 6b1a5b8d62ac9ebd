//! Port-range policy table with scope inheritance.
//!
//! Resolution walks `PolicyKey::fallback_chain` and returns the first explicit
//! entry found. An explicit `(0, 0)` entry counts as found, so it hides any
//! inherited range for that key.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{PolicyKey, PortRange, Protocol, Scope};

#[derive(Debug, Default, Clone)]
pub struct PortRangePolicyStore {
    table: HashMap<PolicyKey, PortRange>,
}

impl PortRangePolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a range for `(scope, protocol)`, overwriting any
    /// previous entry. On error the table is left untouched.
    pub fn set_range(
        &mut self,
        scope: Scope,
        protocol: Protocol,
        min_port: i32,
        max_port: i32,
    ) -> Result<()> {
        let key = PolicyKey::new(scope, protocol);
        let range = PortRange::new(min_port, max_port).map_err(|e| {
            tracing::debug!(%key, min_port, max_port, error = %e, "port range rejected");
            e
        })?;

        self.insert(key, range);
        Ok(())
    }

    /// Store an already validated range.
    pub fn insert(&mut self, key: PolicyKey, range: PortRange) {
        tracing::debug!(%key, %range, "port range set");
        self.table.insert(key, range);
    }

    /// Effective range after applying scope inheritance. `PortRange::UNSET`
    /// when nothing along the chain is configured.
    pub fn get_effective_range(&self, scope: Scope, protocol: Protocol) -> PortRange {
        PolicyKey::new(scope, protocol)
            .fallback_chain()
            .find_map(|k| self.table.get(&k).copied())
            .unwrap_or(PortRange::UNSET)
    }

    /// Explicit entry for a key, without inheritance.
    pub fn get_explicit(&self, scope: Scope, protocol: Protocol) -> Option<PortRange> {
        self.table.get(&PolicyKey::new(scope, protocol)).copied()
    }

    /// Whether traffic on `port` is permitted. An unset effective range places
    /// no restriction.
    pub fn is_port_allowed(&self, scope: Scope, protocol: Protocol, port: u16) -> bool {
        let range = self.get_effective_range(scope, protocol);
        range.is_unset() || range.contains(port)
    }

    /// Explicit entries sorted by key.
    pub fn entries(&self) -> Vec<(PolicyKey, PortRange)> {
        let mut out: Vec<_> = self.table.iter().map(|(k, r)| (*k, *r)).collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
