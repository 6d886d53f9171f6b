//! Top-level facade crate for reqmirror.
//!
//! Re-exports the core types and the web library so users can depend on a single crate.

pub mod core {
    pub use reqmirror_core::*;
}

pub mod web {
    pub use reqmirror_web::*;
}
