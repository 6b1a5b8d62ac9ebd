//! Value types: scope, protocol, port range and the table key.
//!
//! Raw enumerator values arrive as `i32` from the host boundary. Conversion
//! into `Scope`/`Protocol` is the only place enum membership is checked; once a
//! typed value exists it is valid by construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PortScopeError, Result};

/// Lowest port a non-sentinel range may include.
pub const MIN_ALLOWED_PORT: i32 = 1025;
/// Highest port a non-sentinel range may include.
pub const MAX_ALLOWED_PORT: i32 = 65535;

/// Context a port-range restriction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    /// Applies to all traffic unless a narrower scope is configured.
    #[serde(rename = "default")]
    Default,
    /// WebRTC transports only.
    #[serde(rename = "web_rtc")]
    WebRtcOnly,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::Default, Scope::WebRtcOnly];

    /// Raw enumerator value at the host boundary.
    pub fn as_raw(self) -> i32 {
        match self {
            Scope::Default => 0,
            Scope::WebRtcOnly => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Default => "default",
            Scope::WebRtcOnly => "web_rtc",
        }
    }

    /// Scope consulted when this one has no explicit entry.
    pub fn parent(self) -> Option<Scope> {
        match self {
            Scope::Default => None,
            Scope::WebRtcOnly => Some(Scope::Default),
        }
    }
}

impl TryFrom<i32> for Scope {
    type Error = PortScopeError;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(Scope::Default),
            1 => Ok(Scope::WebRtcOnly),
            other => Err(PortScopeError::InvalidArgument(format!(
                "unrecognized scope: {other}"
            ))),
        }
    }
}

impl FromStr for Scope {
    type Err = PortScopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(Scope::Default),
            "web_rtc" => Ok(Scope::WebRtcOnly),
            other => Err(PortScopeError::InvalidArgument(format!(
                "unrecognized scope: {other}"
            ))),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport protocol a restriction applies to. Only UDP is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Protocol {
    #[serde(rename = "udp")]
    Udp,
}

impl Protocol {
    pub fn as_raw(self) -> i32 {
        match self {
            Protocol::Udp => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Udp => "udp",
        }
    }
}

impl TryFrom<i32> for Protocol {
    type Error = PortScopeError;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(Protocol::Udp),
            other => Err(PortScopeError::InvalidArgument(format!(
                "unrecognized protocol: {other}"
            ))),
        }
    }
}

impl FromStr for Protocol {
    type Err = PortScopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "udp" => Ok(Protocol::Udp),
            other => Err(PortScopeError::InvalidArgument(format!(
                "unrecognized protocol: {other}"
            ))),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive port interval. `(0, 0)` means "no restriction".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    min: u16,
    max: u16,
}

impl PortRange {
    /// The unset sentinel.
    pub const UNSET: PortRange = PortRange { min: 0, max: 0 };

    /// Validate a raw `(min, max)` pair.
    ///
    /// `(0, 0)` is always accepted. Anything else must satisfy
    /// `1025 <= min <= max <= 65535`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min == 0 && max == 0 {
            return Ok(Self::UNSET);
        }

        let allowed = MIN_ALLOWED_PORT..=MAX_ALLOWED_PORT;
        if !allowed.contains(&min) {
            return Err(PortScopeError::InvalidArgument(format!(
                "min port {min} outside {MIN_ALLOWED_PORT}..={MAX_ALLOWED_PORT}"
            )));
        }
        if !allowed.contains(&max) {
            return Err(PortScopeError::InvalidArgument(format!(
                "max port {max} outside {MIN_ALLOWED_PORT}..={MAX_ALLOWED_PORT}"
            )));
        }
        if min > max {
            return Err(PortScopeError::InvalidArgument(format!(
                "min port {min} greater than max port {max}"
            )));
        }

        // Both bounds were checked against 1025..=65535 above.
        let min = u16::try_from(min)
            .map_err(|_| PortScopeError::InvalidArgument(format!("min port {min} not a u16")))?;
        let max = u16::try_from(max)
            .map_err(|_| PortScopeError::InvalidArgument(format!("max port {max} not a u16")))?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u16 {
        self.min
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Whether `port` lies within the interval. Always false for the sentinel.
    pub fn contains(&self, port: u16) -> bool {
        !self.is_unset() && port >= self.min && port <= self.max
    }

    /// The pair as the host boundary sees it.
    pub fn as_raw(&self) -> (i32, i32) {
        (i32::from(self.min), i32::from(self.max))
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Unique table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolicyKey {
    pub scope: Scope,
    pub protocol: Protocol,
}

impl PolicyKey {
    pub fn new(scope: Scope, protocol: Protocol) -> Self {
        Self { scope, protocol }
    }

    /// Keys consulted in order when resolving an effective range:
    /// this key first, then each parent scope with the same protocol.
    pub fn fallback_chain(self) -> impl Iterator<Item = PolicyKey> {
        let protocol = self.protocol;
        std::iter::successors(Some(self.scope), |s| s.parent())
            .map(move |scope| PolicyKey { scope, protocol })
    }
}

impl fmt::Display for PolicyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.protocol)
    }
}
