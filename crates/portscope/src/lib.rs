//! Top-level facade crate for portscope.
//!
//! Re-exports the core store and the server library so users can depend on a single crate.

pub mod core {
    pub use portscope_core::*;
}

pub mod server {
    pub use portscope_server::*;
}
