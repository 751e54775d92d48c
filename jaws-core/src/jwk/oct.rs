use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{JWKParameters, JWKType};
use crate::dual::{Base64Url, DualValue};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Symmetric key (`"kty": "oct"`), see [`rfc7518`]
///
/// [`rfc7518`]: https://datatracker.ietf.org/doc/html/rfc7518#section-6.4
pub struct JWKOct {
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    k: DualValue<Base64Url>,
    #[serde(flatten)]
    parameters: JWKParameters,
    #[serde(flatten)]
    extension: Map<String, Value>,
}

impl JWKOct {
    /// The key type of every [`JWKOct`].
    pub const KEY_TYPE: JWKType = JWKType::OCT;

    /// Create a symmetric key holding the given key value.
    pub fn new(k: impl Into<Vec<u8>>) -> Self {
        Self::default().with_k(k.into())
    }

    byte_parameters! {
        /// The key value `k`.
        k,
    }

    key_members!();
}
