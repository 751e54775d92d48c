//! utilities crate for jaws
//!
//! `jaws-utils` contains utilities used by `jaws`,
//! not really being part of one of the other crates, or used
//! by plenty of other crates.
//!
//! # Jaws
//!
//! Crate used by the end-user `jaws` crate and `jaws` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;
