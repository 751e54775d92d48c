//! 🦈 jaws is a JOSE toolkit for the 🦀 Rust language: JSON Web Keys, JSON Web Signatures
//! and the JSON Web Algorithms which bind them to native crypto keys.
//!
//! | category | support list |
//! |-|-|
//! | ✅ [JWK](crate::jwk) | ✅ EC ⸱ ✅ RSA ⸱ ✅ oct ⸱ ✅ unknown `kty` passthrough ⸱ ✅ [key sets](crate::jwk::JWKSet) ⸱ ✅ [thumbprints](crate::jwk::JWK::thumb_sha256) |
//! | ✅ [JWS](crate::jws) | ✅ compact ⸱ ✅ flattened JSON ⸱ ✅ general JSON ⸱ ✅ [sign](crate::jws::Signer) ⸱ ✅ [verify](crate::jws::Verifier) |
//! | ✅ [JWA](crate::JWA) | ✅ `RS256`/`RS384`/`RS512` ⸱ ✅ `ES256`/`ES384`/`ES512` ⸱ ✅ `HS256`/`HS384`/`HS512` ⸱ ❌ `PS*` signing |
//! | ✅ utilities | ✅ [Base64URL](crate::b64) ⸱ ✅ [error handling](crate::error) |
//!
//! JWE (JSON Web Encryption) is out of scope.
//!
//! # Example
//!
//! ```
//! use jaws::{HmacKey, JWA, JWK, JWS};
//!
//! let key = HmacKey::generate(JWA::HS256)?;
//! let jws = JWS::sign(b"hello", &key, |header| {
//!     header.set_kid("example".to_owned());
//! })?;
//! let compact = jws.to_compact()?;
//!
//! let received = JWS::from_compact(compact.as_str())?;
//! received.verify(&JWK::from(key.export_jwk()))?;
//! assert_eq!(received.payload().bytes(), Some(&b"hello"[..]));
//! # Ok::<_, jaws::error::OpaqueError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error {
    //! Error handling for jaws.
    //!
    //! Fallible operations return an [`OpaqueError`], the concrete error kinds of
    //! the JOSE model can be recovered from it with [`OpaqueError::downcast_ref`].

    #[doc(inline)]
    pub use ::jaws_error::*;

    #[doc(inline)]
    pub use ::jaws_core::error::*;
}

#[doc(inline)]
pub use ::jaws_utils as utils;

#[doc(inline)]
pub use ::jaws_core::*;
