//! Core components of the `jsinject-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`InjectorClient`] and its builder.
//! - The primary [`InjectError`] type.
//! - Redirect following, internal to the client.

/// The main client (`InjectorClient`), builder, and configuration.
pub mod client;
/// The primary error type (`InjectError`) for the crate.
pub mod error;

pub use client::{InjectorClient, InjectorClientBuilder};
pub use error::InjectError;

/// True when `JSINJECT_DEBUG=1` is set in the environment.
pub(crate) fn debug_enabled() -> bool {
    std::env::var("JSINJECT_DEBUG").ok().as_deref() == Some("1")
}
