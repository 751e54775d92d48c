//! End-to-end JOSE flows through the public `jaws` API.

mod jwk_interop;
mod jws_flows;
mod utils;
