//! [`JWK`] or JSON Web Key as defined in [`rfc7517`]
//!
//! A [`JWK`] is a tagged variant over the supported key types, selected by
//! the `kty` member. Its key type is fixed by the variant and cannot change
//! after construction. Unknown key types are kept as [`JWKOther`], preserving
//! the literal `kty` and every member.
//!
//! [`rfc7517`]: https://datatracker.ietf.org/doc/html/rfc7517

use aws_lc_rs::digest::{Digest, SHA256, digest};
use jaws_error::{ErrorContext, OpaqueError};
use jaws_utils::macros::{enums::enum_builder, generate_set_and_with};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};

use crate::{
    error::{InvalidArgument, InvalidOperation, UnsupportedAlgorithm},
    jwa::JWA,
    jws::{JWSHeader, Verifier},
};

const RFC7517_KTY: &str = "RFC 7517, section 4.1";

/// getters, mutable getters and setters for Base64URL encoded key members
macro_rules! byte_parameters {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> &$crate::dual::DualValue<$crate::dual::Base64Url> {
                &self.$name
            }

            ::jaws_utils::macros::paste! {
                $(#[$doc])*
                pub fn [<$name _mut>](&mut self) -> &mut $crate::dual::DualValue<$crate::dual::Base64Url> {
                    &mut self.$name
                }
            }

            ::jaws_utils::macros::generate_set_and_with! {
                $(#[$doc])*
                pub fn $name(mut self, $name: Option<Vec<u8>>) -> Self {
                    self.$name = $name.map($crate::dual::DualValue::from_bytes).unwrap_or_default();
                    self
                }
            }
        )+
    };
}

/// accessors for the members every key type carries
macro_rules! key_members {
    () => {
        /// The parameters shared by all key types.
        pub fn parameters(&self) -> &$crate::jwk::JWKParameters {
            &self.parameters
        }

        /// Mutable access to the parameters shared by all key types.
        pub fn parameters_mut(&mut self) -> &mut $crate::jwk::JWKParameters {
            &mut self.parameters
        }

        /// Members not known to this key type, preserved for round trips.
        pub fn extension(&self) -> &::serde_json::Map<String, ::serde_json::Value> {
            &self.extension
        }

        /// Mutable access to the members not known to this key type.
        pub fn extension_mut(&mut self) -> &mut ::serde_json::Map<String, ::serde_json::Value> {
            &mut self.extension
        }
    };
}

mod ec;
pub use ec::{CurveName, JWKEc, JWKEllipticCurves};

mod oct;
pub use oct::JWKOct;

mod rsa;
pub use rsa::JWKRsa;

enum_builder! {
    /// The "kty" (key type) parameter identifies the cryptographic algorithm
    /// family used with the key, such as "RSA", "EC", or "oct"
    @String
    pub enum JWKType {
        /// Elliptic curve
        EC => "EC",
        /// RSA
        RSA => "RSA",
        /// an octet sequence key, which represents a symmetric key
        OCT => "oct",
    }
}

enum_builder! {
    /// [`JWKUse`] identifies the intended use of the public key
    @String
    pub enum JWKUse {
        /// Signature
        Signature => "sig",
        /// Encryption
        Encryption => "enc",
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Parameters common to all key types, see [`rfc7517`] section 4
///
/// [`rfc7517`]: https://datatracker.ietf.org/doc/html/rfc7517#section-4
pub struct JWKParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alg: Option<JWA>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    r#use: Option<JWKUse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_ops: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x5u: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x5c: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x5t: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "x5t#S256")]
    x5t_sha256: Option<String>,
}

impl JWKParameters {
    /// Intended algorithm to be used with this key
    pub fn alg(&self) -> Option<&JWA> {
        self.alg.as_ref()
    }

    generate_set_and_with! {
        /// Set the intended algorithm to be used with this key
        pub fn alg(mut self, alg: Option<JWA>) -> Self {
            self.alg = alg;
            self
        }
    }

    /// Intended use of the public key
    pub fn key_use(&self) -> Option<&JWKUse> {
        self.r#use.as_ref()
    }

    generate_set_and_with! {
        /// Set the intended use of the public key
        pub fn key_use(mut self, key_use: Option<JWKUse>) -> Self {
            self.r#use = key_use;
            self
        }
    }

    /// Operations for which the key is intended to be used
    pub fn key_ops(&self) -> Option<&[String]> {
        self.key_ops.as_deref()
    }

    generate_set_and_with! {
        /// Set the operations for which the key is intended to be used
        pub fn key_ops(mut self, key_ops: Option<Vec<String>>) -> Self {
            self.key_ops = key_ops;
            self
        }
    }

    /// Key ID
    pub fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    generate_set_and_with! {
        /// Set the key ID
        pub fn kid(mut self, kid: Option<String>) -> Self {
            self.kid = kid;
            self
        }
    }

    /// X.509 URL
    pub fn x5u(&self) -> Option<&str> {
        self.x5u.as_deref()
    }

    /// X.509 certificate chain, as standard Base64 DER certificates
    pub fn x5c(&self) -> Option<&[String]> {
        self.x5c.as_deref()
    }

    generate_set_and_with! {
        /// Set the X.509 certificate chain
        pub fn x5c(mut self, x5c: Option<Vec<String>>) -> Self {
            self.x5c = x5c;
            self
        }
    }

    /// X.509 certificate SHA-1 thumbprint
    pub fn x5t(&self) -> Option<&str> {
        self.x5t.as_deref()
    }

    /// X.509 certificate SHA-256 thumbprint
    pub fn x5t_sha256(&self) -> Option<&str> {
        self.x5t_sha256.as_deref()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Key of a type not known to this crate, kept as-is
pub struct JWKOther {
    #[serde(skip)]
    kty: String,
    #[serde(flatten)]
    parameters: JWKParameters,
    #[serde(flatten)]
    extension: Map<String, Value>,
}

impl JWKOther {
    /// Create an empty key of the given key type.
    ///
    /// Fails for a key type known as [`JWKType`], as such a key
    /// decodes into its own [`JWK`] variant.
    pub fn new(kty: impl Into<String>) -> Result<Self, OpaqueError> {
        let kty = kty.into();
        if JWKType::strict_parse(&kty).is_some() {
            return Err(InvalidArgument::new(
                "kty",
                kty,
                "known key type, use its dedicated key struct",
            )
            .with_reference(RFC7517_KTY)
            .into());
        }
        Ok(Self {
            kty,
            ..Default::default()
        })
    }

    /// The literal `kty` value.
    pub fn kty(&self) -> &str {
        &self.kty
    }

    key_members!();
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// [`JWK`] or JSON Web Key as defined in [`rfc7517`]
///
/// [`rfc7517`]: https://datatracker.ietf.org/doc/html/rfc7517
pub enum JWK {
    /// Elliptic curve key
    EC(JWKEc),
    /// RSA key
    RSA(JWKRsa),
    /// Symmetric key
    OCT(JWKOct),
    /// Key of an unknown key type
    Other(JWKOther),
}

impl JWK {
    /// Decode a [`JWK`] from a JSON object, dispatching on its `kty` member.
    ///
    /// The `kty` value is matched case-insensitively against the known key types,
    /// anything else becomes [`JWK::Other`].
    pub fn from_json_object(mut object: Map<String, Value>) -> Result<Self, OpaqueError> {
        let kty = match object.remove("kty") {
            Some(Value::String(kty)) => kty,
            Some(other) => {
                return Err(InvalidArgument::new("kty", other.to_string(), "must be a string")
                    .with_reference(RFC7517_KTY)
                    .into());
            }
            None => {
                return Err(InvalidArgument::new("kty", "", "required member is missing")
                    .with_reference(RFC7517_KTY)
                    .into());
            }
        };

        let object = Value::Object(object);
        let jwk = match JWKType::from(kty.as_str()) {
            JWKType::EC => Self::EC(serde_json::from_value(object).context("decode EC JWK")?),
            JWKType::RSA => Self::RSA(serde_json::from_value(object).context("decode RSA JWK")?),
            JWKType::OCT => Self::OCT(serde_json::from_value(object).context("decode oct JWK")?),
            JWKType::Unknown(_) => {
                tracing::debug!(%kty, "unknown JWK key type: decode as generic key");
                let mut other: JWKOther =
                    serde_json::from_value(object).context("decode generic JWK")?;
                other.kty = kty;
                Self::Other(other)
            }
        };
        Ok(jwk)
    }

    /// The key type of this key.
    pub fn key_type(&self) -> JWKType {
        match self {
            Self::EC(_) => JWKEc::KEY_TYPE,
            Self::RSA(_) => JWKRsa::KEY_TYPE,
            Self::OCT(_) => JWKOct::KEY_TYPE,
            Self::Other(key) => JWKType::Unknown(key.kty.clone()),
        }
    }

    /// The key type of this key, as written in `kty`.
    pub fn key_type_str(&self) -> &str {
        match self {
            Self::EC(_) => "EC",
            Self::RSA(_) => "RSA",
            Self::OCT(_) => "oct",
            Self::Other(key) => &key.kty,
        }
    }

    /// Set the key type, which only succeeds if it equals the current key type.
    ///
    /// The key type of a [`JWK`] is fixed by its variant.
    pub fn try_set_key_type(&mut self, kty: impl Into<JWKType>) -> Result<&mut Self, OpaqueError> {
        let kty = kty.into();
        if kty == self.key_type() {
            return Ok(self);
        }
        tracing::debug!(
            locked = %self.key_type_str(),
            requested = %kty,
            "refuse to change JWK key type"
        );
        Err(InvalidArgument::new(
            "kty",
            kty.as_str(),
            "key type is fixed once the key is constructed",
        )
        .with_reference(RFC7517_KTY)
        .into())
    }

    /// The parameters shared by all key types.
    pub fn parameters(&self) -> &JWKParameters {
        match self {
            Self::EC(key) => key.parameters(),
            Self::RSA(key) => key.parameters(),
            Self::OCT(key) => key.parameters(),
            Self::Other(key) => key.parameters(),
        }
    }

    /// Mutable access to the parameters shared by all key types.
    pub fn parameters_mut(&mut self) -> &mut JWKParameters {
        match self {
            Self::EC(key) => key.parameters_mut(),
            Self::RSA(key) => key.parameters_mut(),
            Self::OCT(key) => key.parameters_mut(),
            Self::Other(key) => key.parameters_mut(),
        }
    }

    /// Members not known to the key type, preserved for round trips.
    pub fn extension(&self) -> &Map<String, Value> {
        match self {
            Self::EC(key) => key.extension(),
            Self::RSA(key) => key.extension(),
            Self::OCT(key) => key.extension(),
            Self::Other(key) => key.extension(),
        }
    }

    /// Key ID, shortcut for `parameters().kid()`
    pub fn kid(&self) -> Option<&str> {
        self.parameters().kid()
    }

    /// This key without its private members.
    ///
    /// Symmetric keys and keys of an unknown type have no public form.
    pub fn to_public(&self) -> Result<Self, OpaqueError> {
        match self {
            Self::EC(key) => Ok(Self::EC(key.to_public())),
            Self::RSA(key) => Ok(Self::RSA(key.to_public())),
            Self::OCT(_) => Err(InvalidOperation::new("symmetric keys have no public form").into()),
            Self::Other(_) => {
                Err(InvalidOperation::new("unknown key types have no known public form").into())
            }
        }
    }

    /// [`JWKThumb`] as defined in [`rfc7638`] is url safe identifier for a [`JWK`]
    ///
    /// The digest covers the required members of the key type only,
    /// in lexicographic order and without whitespace.
    ///
    /// [`JWKThumb`]: https://datatracker.ietf.org/doc/html/rfc7638#section-3
    /// [`rfc7638`]: https://datatracker.ietf.org/doc/html/rfc7638
    pub fn thumb_sha256(&self) -> Result<Digest, OpaqueError> {
        // field order of the member structs below is the lexicographic order
        #[derive(Serialize)]
        struct EcMembers<'a> {
            crv: &'a str,
            kty: &'static str,
            x: &'a str,
            y: &'a str,
        }

        #[derive(Serialize)]
        struct RsaMembers<'a> {
            e: &'a str,
            kty: &'static str,
            n: &'a str,
        }

        #[derive(Serialize)]
        struct OctMembers<'a> {
            k: &'a str,
            kty: &'static str,
        }

        let members = match self {
            Self::EC(key) => serde_json::to_vec(&EcMembers {
                crv: thumbprint_member(key.crv().raw().map(String::as_str), "crv")?,
                kty: "EC",
                x: thumbprint_member(key.x().encoded(), "x")?,
                y: thumbprint_member(key.y().encoded(), "y")?,
            }),
            Self::RSA(key) => serde_json::to_vec(&RsaMembers {
                e: thumbprint_member(key.e().encoded(), "e")?,
                kty: "RSA",
                n: thumbprint_member(key.n().encoded(), "n")?,
            }),
            Self::OCT(key) => serde_json::to_vec(&OctMembers {
                k: thumbprint_member(key.k().encoded(), "k")?,
                kty: "oct",
            }),
            Self::Other(_) => {
                return Err(InvalidOperation::new(
                    "thumbprint members of unknown key types are undefined",
                )
                .into());
            }
        }
        .context("serialize JWK thumbprint members")?;

        Ok(digest(&SHA256, &members))
    }
}

fn thumbprint_member<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, InvalidArgument> {
    value.ok_or_else(|| InvalidArgument::new(name, "", "required member for the JWK thumbprint"))
}

impl From<JWKEc> for JWK {
    fn from(value: JWKEc) -> Self {
        Self::EC(value)
    }
}

impl From<JWKRsa> for JWK {
    fn from(value: JWKRsa) -> Self {
        Self::RSA(value)
    }
}

impl From<JWKOct> for JWK {
    fn from(value: JWKOct) -> Self {
        Self::OCT(value)
    }
}

impl From<JWKOther> for JWK {
    fn from(value: JWKOther) -> Self {
        Self::Other(value)
    }
}

impl Serialize for JWK {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Tagged<'a, K> {
            kty: &'a str,
            #[serde(flatten)]
            key: &'a K,
        }

        let kty = self.key_type_str();
        match self {
            Self::EC(key) => Tagged { kty, key }.serialize(serializer),
            Self::RSA(key) => Tagged { kty, key }.serialize(serializer),
            Self::OCT(key) => Tagged { kty, key }.serialize(serializer),
            Self::Other(key) => Tagged { kty, key }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JWK {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_json_object(object).map_err(de::Error::custom)
    }
}

impl Verifier for JWK {
    type Error = OpaqueError;

    fn verify(
        &self,
        header: &JWSHeader,
        signing_input: &[u8],
        signature: &[u8],
    ) -> Result<(), Self::Error> {
        let Some(alg) = header.alg() else {
            return Err(UnsupportedAlgorithm::missing(self.key_type()).into());
        };
        match self {
            Self::EC(key) => crate::ec::verify(key, alg, signing_input, signature),
            Self::RSA(key) => crate::rsa::verify(key, alg, signing_input, signature),
            Self::OCT(key) => crate::hmac::verify(key, alg, signing_input, signature),
            Self::Other(_) => Err(UnsupportedAlgorithm::new(alg.clone(), self.key_type()).into()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// A set of JSON Web Keys, see [`rfc7517`] section 5
///
/// [`rfc7517`]: https://datatracker.ietf.org/doc/html/rfc7517#section-5
pub struct JWKSet {
    /// The keys in the set.
    pub keys: Vec<JWK>,
}

impl JWKSet {
    /// Create a new [`JWKSet`] from the given keys.
    pub fn new(keys: Vec<JWK>) -> Self {
        Self { keys }
    }

    /// Find the first key with the given key ID.
    pub fn find(&self, kid: &str) -> Option<&JWK> {
        self.keys.iter().find(|key| key.kid() == Some(kid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b64;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn dispatch_on_kty() {
        let jwk: JWK = serde_json::from_str(r#"{"kty":"RSA"}"#).unwrap();
        assert!(matches!(jwk, JWK::RSA(_)));

        let jwk: JWK = serde_json::from_str(r#"{"kty":"EC"}"#).unwrap();
        assert!(matches!(jwk, JWK::EC(_)));

        let jwk: JWK = serde_json::from_str(r#"{"kty":"oct"}"#).unwrap();
        assert!(matches!(jwk, JWK::OCT(_)));

        let jwk: JWK = serde_json::from_str(r#"{"kty":"bogus"}"#).unwrap();
        assert!(matches!(jwk, JWK::Other(_)));
        assert_eq!(jwk.key_type_str(), "bogus");
        assert_eq!(jwk.key_type(), JWKType::Unknown("bogus".to_owned()));
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let jwk: JWK = serde_json::from_str(r#"{"kty":"ec"}"#).unwrap();
        assert!(matches!(jwk, JWK::EC(_)));
        assert_eq!(jwk.key_type_str(), "EC");

        let jwk: JWK = serde_json::from_str(r#"{"kty":"OCT"}"#).unwrap();
        assert!(matches!(jwk, JWK::OCT(_)));
    }

    #[test]
    fn missing_kty_is_rejected() {
        assert_err!(serde_json::from_str::<JWK>(r#"{"n":"AQAB"}"#));
        assert_err!(serde_json::from_str::<JWK>(r#"{"kty":1}"#));

        let err = assert_err!(JWK::from_json_object(Map::new()));
        assert_eq!(
            err.downcast_ref::<InvalidArgument>().map(InvalidArgument::parameter),
            Some("kty")
        );
    }

    #[test]
    fn key_type_is_locked() {
        let mut jwk = JWK::EC(JWKEc::new());
        let err = assert_err!(jwk.try_set_key_type("RSA"));
        assert!(err.is::<InvalidArgument>());
        assert_eq!(jwk.key_type(), JWKType::EC);

        assert_ok!(jwk.try_set_key_type("EC"));
        assert_ok!(jwk.try_set_key_type(JWKType::EC));

        let mut jwk = JWK::Other(JWKOther::new("OKP").unwrap());
        assert_ok!(jwk.try_set_key_type("OKP"));
        assert_err!(jwk.try_set_key_type("oct"));
        assert_eq!(jwk.key_type_str(), "OKP");
    }

    #[test]
    fn members_and_extension_round_trip() {
        let json = serde_json::json!({
            "kty": "EC",
            "crv": "P-256",
            "x": "f83OJ3D2xF1Bg8vub9tLe1gHMzV76e8Tus9uPHvRVEU",
            "y": "x_FEzRu9m36HLN_tue659LNpXW6pCyStikYjKIWI5a0",
            "kid": "Public key used in JWS spec Appendix A.3 example",
            "use": "sig",
            "ext": true
        });
        let jwk: JWK = serde_json::from_value(json.clone()).unwrap();
        let JWK::EC(key) = &jwk else {
            panic!("expected EC key, got {jwk:?}");
        };
        assert_eq!(key.curve(), Some(JWKEllipticCurves::P256));
        assert_eq!(key.x().bytes().map(<[u8]>::len), Some(32));
        assert_eq!(key.parameters().key_use(), Some(&JWKUse::Signature));
        assert_eq!(key.extension().get("ext"), Some(&Value::Bool(true)));
        assert_eq!(
            jwk.kid(),
            Some("Public key used in JWS spec Appendix A.3 example")
        );

        assert_eq!(serde_json::to_value(&jwk).unwrap(), json);
    }

    #[test]
    fn unknown_key_type_round_trip() {
        let json = serde_json::json!({"kty": "OKP", "crv": "Ed25519", "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo", "alg": "EdDSA"});
        let jwk: JWK = serde_json::from_value(json.clone()).unwrap();
        let JWK::Other(key) = &jwk else {
            panic!("expected generic key, got {jwk:?}");
        };
        assert_eq!(key.kty(), "OKP");
        assert_eq!(key.parameters().alg(), Some(&JWA::Unknown("EdDSA".to_owned())));
        assert_eq!(serde_json::to_value(&jwk).unwrap(), json);
    }

    #[test]
    fn generic_key_rejects_known_key_type() {
        for kty in ["EC", "RSA", "oct", "ec"] {
            let err = assert_err!(JWKOther::new(kty));
            let err = err.downcast_ref::<InvalidArgument>().unwrap();
            assert_eq!(err.parameter(), "kty");
            assert_eq!(err.value(), kty);
        }

        let jwk = JWK::Other(JWKOther::new("OKP").unwrap());
        assert_eq!(jwk.key_type(), JWKType::Unknown("OKP".to_owned()));
        let received: JWK = serde_json::from_value(serde_json::to_value(&jwk).unwrap()).unwrap();
        assert_eq!(received, jwk);
    }

    #[test]
    fn invalid_curve_fails_decode() {
        let err = serde_json::from_str::<JWK>(r#"{"kty":"EC","crv":"P-192"}"#).unwrap_err();
        assert!(err.to_string().contains("P-192"));
    }

    #[test]
    fn rfc7638_thumbprint() {
        let jwk: JWK = serde_json::from_value(serde_json::json!({
            "kty": "RSA",
            "n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw",
            "e": "AQAB",
            "alg": "RS256",
            "kid": "2011-04-29"
        }))
        .unwrap();
        let thumb = jwk.thumb_sha256().unwrap();
        assert_eq!(
            b64::encode(thumb.as_ref()),
            "NzbLsXh8uDCcd-6MNwXF4W_7noWXFZAfHkxZsRGC9Xs"
        );

        let err = assert_err!(JWK::RSA(JWKRsa::new()).thumb_sha256());
        assert!(err.is::<InvalidArgument>());
        assert_err!(JWK::Other(JWKOther::new("OKP").unwrap()).thumb_sha256());
    }

    #[test]
    fn public_projection() {
        let jwk = JWK::RSA(JWKRsa::new().with_n(vec![1; 4]).with_e(vec![1, 0, 1]).with_d(vec![2; 4]));
        let JWK::RSA(public) = jwk.to_public().unwrap() else {
            panic!("public projection must keep the key type");
        };
        assert!(!public.is_private());

        let err = assert_err!(JWK::OCT(JWKOct::new(b"secret".to_vec())).to_public());
        assert!(err.is::<InvalidOperation>());
    }

    #[test]
    fn key_set_lookup_by_kid() {
        let set: JWKSet = serde_json::from_value(serde_json::json!({
            "keys": [
                {"kty": "oct", "k": "AyM1SysPpbyDfgZld3umj1qzKObwVMkoqQ", "kid": "hmac"},
                {"kty": "RSA", "n": "AQAB", "e": "AQAB", "kid": "rsa"},
                {"kty": "OKP", "kid": "okp"}
            ]
        }))
        .unwrap();
        assert_eq!(set.keys.len(), 3);
        assert!(matches!(set.find("rsa"), Some(JWK::RSA(_))));
        assert!(matches!(set.find("okp"), Some(JWK::Other(_))));
        assert!(set.find("missing").is_none());
    }
}
