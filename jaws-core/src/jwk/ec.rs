use jaws_error::OpaqueError;
use jaws_utils::macros::generate_set_and_with;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use super::{JWKParameters, JWKType};
use crate::{
    dual::{Base64Url, Conversion, DualValue},
    error::InvalidArgument,
    jwa::JWA,
};

const RFC7518_CURVES: &str = "RFC 7518, section 6.2.1.1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Named curves usable with an EC [`JWK`](super::JWK), see [`rfc7518`]
///
/// [`rfc7518`]: https://datatracker.ietf.org/doc/html/rfc7518#section-6.2.1.1
pub enum JWKEllipticCurves {
    /// NIST P-256, `"P-256"`
    P256,
    /// NIST P-384, `"P-384"`
    P384,
    /// NIST P-521, `"P-521"`
    P521,
}

impl JWKEllipticCurves {
    /// The curve identifier as used in the `crv` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }

    /// Size in bytes of a single coordinate (or the private scalar).
    pub fn coordinate_size(self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }
}

impl fmt::Display for JWKEllipticCurves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JWKEllipticCurves {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // curve identifiers are case-sensitive
        match s {
            "P-256" => Ok(Self::P256),
            "P-384" => Ok(Self::P384),
            "P-521" => Ok(Self::P521),
            _ => Err(InvalidArgument::new("crv", s, "unsupported elliptic curve")
                .with_reference(RFC7518_CURVES)),
        }
    }
}

impl From<JWKEllipticCurves> for JWA {
    fn from(value: JWKEllipticCurves) -> Self {
        match value {
            JWKEllipticCurves::P256 => Self::ES256,
            JWKEllipticCurves::P384 => Self::ES384,
            JWKEllipticCurves::P521 => Self::ES512,
        }
    }
}

impl TryFrom<&JWA> for JWKEllipticCurves {
    type Error = InvalidArgument;

    fn try_from(value: &JWA) -> Result<Self, Self::Error> {
        match value {
            JWA::ES256 => Ok(Self::P256),
            JWA::ES384 => Ok(Self::P384),
            JWA::ES512 => Ok(Self::P521),
            other => Err(InvalidArgument::new(
                "alg",
                other.as_str(),
                "not an elliptic curve algorithm",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// [`Conversion`] between a `crv` identifier and its [`JWKEllipticCurves`].
pub struct CurveName;

impl Conversion for CurveName {
    type Raw = String;
    type Converted = JWKEllipticCurves;

    fn to_converted(raw: &String) -> Result<Option<JWKEllipticCurves>, OpaqueError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(raw.parse()?))
    }

    fn to_raw(converted: &JWKEllipticCurves) -> Result<Option<String>, OpaqueError> {
        Ok(Some(converted.as_str().to_owned()))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Elliptic curve key (`"kty": "EC"`), see [`rfc7518`]
///
/// [`rfc7518`]: https://datatracker.ietf.org/doc/html/rfc7518#section-6.2
pub struct JWKEc {
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    crv: DualValue<CurveName>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    x: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    y: DualValue<Base64Url>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    d: DualValue<Base64Url>,
    #[serde(flatten)]
    parameters: JWKParameters,
    #[serde(flatten)]
    extension: Map<String, Value>,
}

impl JWKEc {
    /// The key type of every [`JWKEc`].
    pub const KEY_TYPE: JWKType = JWKType::EC;

    /// Create an empty EC key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an EC public key for the given curve and point coordinates.
    pub fn from_public_point(
        curve: JWKEllipticCurves,
        x: impl Into<Vec<u8>>,
        y: impl Into<Vec<u8>>,
    ) -> Self {
        Self::new()
            .with_curve(curve)
            .with_x(x.into())
            .with_y(y.into())
    }

    /// The `crv` parameter.
    pub fn crv(&self) -> &DualValue<CurveName> {
        &self.crv
    }

    /// Mutable access to the `crv` parameter.
    pub fn crv_mut(&mut self) -> &mut DualValue<CurveName> {
        &mut self.crv
    }

    /// The named curve, if `crv` is set.
    pub fn curve(&self) -> Option<JWKEllipticCurves> {
        self.crv.converted().copied()
    }

    generate_set_and_with! {
        /// Set the named curve.
        pub fn curve(mut self, curve: Option<JWKEllipticCurves>) -> Self {
            self.crv = curve.map(DualValue::from_curve).unwrap_or_default();
            self
        }
    }

    byte_parameters! {
        /// The `x` coordinate of the public point.
        x,
        /// The `y` coordinate of the public point.
        y,
        /// The private scalar `d`.
        d,
    }

    /// Returns true if the private scalar is present.
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    key_members!();

    /// This key without its private scalar.
    #[must_use]
    pub fn to_public(&self) -> Self {
        let mut public = self.clone();
        public.d.clear();
        public
    }
}

impl DualValue<CurveName> {
    /// Create a `crv` value for the given named curve.
    pub fn from_curve(curve: JWKEllipticCurves) -> Self {
        Self::from_pair(curve.as_str().to_owned(), curve)
    }
}
