//! reqmirror core: the request-description data model and its presenters.
//!
//! This crate defines what a described request looks like (IP, location,
//! device/OS/browser sections), the empty-value stripping rule, and the text
//! and image renderings of a description. It carries no HTTP or runtime
//! dependencies so the contracts can be exercised in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ReqMirrorError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod describe;
pub mod error;
pub mod render;

/// Shared result type.
pub use error::{ReqMirrorError, Result};
