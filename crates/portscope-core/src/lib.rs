//! portscope core: allowed port-range policy store, value types, and errors.
//!
//! The store maps `(scope, protocol)` to an inclusive port range and resolves
//! reads through a scope fallback chain (`web_rtc` inherits from `default`).
//! It carries no runtime or transport dependencies; hosts consume it through
//! the `AllowedPortRangeOptions` interface in [`options`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Invalid input from
//! the host boundary surfaces as `PortScopeError::InvalidArgument`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod options;
pub mod store;
pub mod types;

/// Shared result type.
pub use error::{PortScopeError, Result};
pub use options::{AllowedPortRangeOptions, EnvironmentOptions};
pub use store::PortRangePolicyStore;
pub use types::{PolicyKey, PortRange, Protocol, Scope};
