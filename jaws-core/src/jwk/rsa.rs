use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{JWKParameters, JWKType};
use crate::dual::{Base64Url, DualValue};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// RSA key (`"kty": "RSA"`), see [`rfc7518`]
///
/// The key is public-only unless the private exponent `d` is present.
/// Additional primes (`oth`) are not modelled and end up in the
/// [extension members](Self::extension).
///
/// [`rfc7518`]: https://datatracker.ietf.org/doc/html/rfc7518#section-6.3
pub struct JWKRsa {
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    n: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    e: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    d: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    p: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    q: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    dp: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    dq: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    qi: DualValue<Base64Url>,
    #[serde(flatten)]
    parameters: JWKParameters,
    #[serde(flatten)]
    extension: Map<String, Value>,
}

impl JWKRsa {
    /// The key type of every [`JWKRsa`].
    pub const KEY_TYPE: JWKType = JWKType::RSA;

    /// Create an empty RSA key.
    pub fn new() -> Self {
        Self::default()
    }

    byte_parameters! {
        /// The modulus `n`.
        n,
        /// The public exponent `e`.
        e,
        /// The private exponent `d`.
        d,
        /// The first prime factor `p`.
        p,
        /// The second prime factor `q`.
        q,
        /// The first factor CRT exponent `dp`.
        dp,
        /// The second factor CRT exponent `dq`.
        dq,
        /// The first CRT coefficient `qi`.
        qi,
    }

    /// Returns true if the private exponent is present.
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    key_members!();

    /// This key with all private members removed.
    #[must_use]
    pub fn to_public(&self) -> Self {
        let mut public = self.clone();
        for private in [
            &mut public.d,
            &mut public.p,
            &mut public.q,
            &mut public.dp,
            &mut public.dq,
            &mut public.qi,
        ] {
            private.clear();
        }
        public
    }
}
