//! # JOSE: JSON Object Signing and Encryption
//!
//! JOSE is an IETF standard for securely transferring data between parties using JSON.
//! It provides a general framework for signing and encrypting any kind of data, and it's
//! the foundation for technologies like JSON Web Tokens (JWTs).
//!
//! This crate covers the signing half of the framework:
//!
//! * JWS (JSON Web Signature): This specification defines how to create a digital signature for
//!   any data. A JWS proves data integrity and authenticity. It consists of a Header, a
//!   Payload (the data), and a Signature, all encoded in Base64Url and joined by dots.
//!   See [`rfc7515`] for more details.
//!
//! * JWK (JSON Web Key): This specifies a JSON format for representing cryptographic keys.
//!   This makes it simple to share the public keys required to verify signatures.
//!   See [`rfc7517`] for more details.
//!
//! * JWA (JSON Web Algorithm): This is essentially a list of the specific cryptographic
//!   algorithms that are used for signing within the JOSE framework. The alg
//!   parameter in the JOSE header identifies which algorithm was used.
//!   See [`rfc7518`] for more details.
//!
//! Keys of the [`rsa`], [`ec`] and [`hmac`] families can be exported to and imported
//! from a [`JWK`], and sign a [`JWS`] through the [`Signer`] trait. A [`JWK`] in turn
//! verifies a [`JWS`] as [`Verifier`].
//!
//! # Jaws
//!
//! Crate used by the end-user `jaws` crate and `jaws` crate authors alike.
//!
//! [`rfc7515`]: https://datatracker.ietf.org/doc/html/rfc7515
//! [`rfc7517`]: https://datatracker.ietf.org/doc/html/rfc7517
//! [`rfc7518`]: https://datatracker.ietf.org/doc/html/rfc7518

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod b64;
pub mod dual;
pub mod error;

mod jwa;
pub use jwa::JWA;

pub mod jwk;
pub use jwk::{JWK, JWKEc, JWKEllipticCurves, JWKOct, JWKRsa, JWKSet, JWKType, JWKUse};

pub mod jws;
pub use jws::{JWS, JWSCompact, JWSHeader, JWSSignature, Signer, Verifier};

pub mod ec;
pub use ec::EcdsaKey;

pub mod hmac;
pub use hmac::HmacKey;

pub mod rsa;

pub mod dep {
    //! Dependencies for jaws JOSE modules.
    //!
    //! Exported for your convenience

    pub mod aws_lc_rs {
        //! Re-export of the [`aws-lc-rs`] crate.
        //!
        //! [`aws-lc-rs`]: https://docs.rs/aws-lc-rs

        #[doc(inline)]
        pub use aws_lc_rs::*;
    }

    pub mod rsa {
        //! Re-export of the [`rsa`] crate.
        //!
        //! [`rsa`]: https://docs.rs/rsa

        #[doc(inline)]
        pub use ::rsa::*;
    }

    pub mod mime {
        //! Re-export of the [`mime`] crate.
        //!
        //! [`mime`]: https://docs.rs/mime

        #[doc(inline)]
        pub use mime::*;
    }

    pub mod iri_string {
        //! Re-export of the [`iri-string`] crate.
        //!
        //! [`iri-string`]: https://docs.rs/iri-string

        #[doc(inline)]
        pub use iri_string::*;
    }
}
