//! Error types for jaws.
//!
//! Fallible jaws functions return an [`OpaqueError`]. It hides the concrete
//! error kind behind a [`BoxError`], while the caller can still recover it
//! with [`OpaqueError::is`], [`OpaqueError::downcast_ref`], or
//! [`OpaqueError::find`] when the error was wrapped in a context message
//! by [`ErrorContext`].
//!
//! # Jaws
//!
//! Crate used by the end-user `jaws` crate and `jaws` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

mod opaque;
pub use opaque::OpaqueError;

mod context;
pub use context::ErrorContext;
