//! [`JWS`] or JSON Web Signature as defined in [`rfc7515`]
//!
//! A single [`JWS`] type covers the flattened and the general JSON
//! serialization: while only one signature is present it is stored at the
//! top level (flattened form, which can also be turned into a [`JWSCompact`]),
//! adding a second signature moves both into the `signatures` array.
//!
//! [`rfc7515`]: https://datatracker.ietf.org/doc/html/rfc7515

use jaws_error::{BoxError, ErrorContext, OpaqueError};
use jaws_utils::macros::generate_set_and_with;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use crate::{
    b64,
    dual::{Base64Url, DualValue},
    error::InvalidOperation,
};

mod header;
pub use header::{JWSHeader, MediaType, ProtectedHeader, UriReference};

/// [`Signer`] implements all methods which are needed to sign a [`JWS`],
/// and add the needed info to its protected header
pub trait Signer {
    type Error: Into<BoxError>;

    /// Set headers which are needed to verify the final signature
    ///
    /// Example headers are: `alg`, `jwk`
    fn set_headers(&self, header: &mut JWSHeader) -> Result<(), Self::Error>;

    /// Sign the signing input, as described by the (already encoded) protected header
    fn sign(&self, header: &JWSHeader, signing_input: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// [`Verifier`] will be called to confirm if a single signature is valid
pub trait Verifier {
    type Error: Into<BoxError>;

    /// Verify the signature over the signing input, as described by the protected header
    fn verify(
        &self,
        header: &JWSHeader,
        signing_input: &[u8],
        signature: &[u8],
    ) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// A single signature of a [`JWS`], see [`rfc7515, section 7.2.1`]
///
/// [`rfc7515, section 7.2.1`]: https://datatracker.ietf.org/doc/html/rfc7515#section-7.2.1
pub struct JWSSignature {
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    protected: DualValue<ProtectedHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    signature: DualValue<Base64Url>,
}

impl JWSSignature {
    /// Create an empty [`JWSSignature`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The integrity protected header.
    pub fn protected(&self) -> &DualValue<ProtectedHeader> {
        &self.protected
    }

    /// Mutable access to the integrity protected header.
    pub fn protected_mut(&mut self) -> &mut DualValue<ProtectedHeader> {
        &mut self.protected
    }

    /// The decoded protected header, if any.
    pub fn protected_header(&self) -> Option<&JWSHeader> {
        self.protected.converted()
    }

    /// The unprotected header.
    pub fn header(&self) -> Option<&Map<String, Value>> {
        self.header.as_ref()
    }

    generate_set_and_with! {
        /// Set the unprotected header, which is not integrity protected
        pub fn header(mut self, header: Option<Map<String, Value>>) -> Self {
            self.header = header;
            self
        }
    }

    /// The signature.
    pub fn signature(&self) -> &DualValue<Base64Url> {
        &self.signature
    }

    /// Mutable access to the signature.
    pub fn signature_mut(&mut self) -> &mut DualValue<Base64Url> {
        &mut self.signature
    }

    /// Returns true if signature bytes are present.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// The input signed by this signature for the given payload:
    /// `BASE64URL(protected) || '.' || BASE64URL(payload)`
    ///
    /// Use [`JWS::signing_input`] for a received [`JWS`],
    /// which keeps the payload exactly as it was encoded.
    pub fn signing_input(&self, payload: impl AsRef<[u8]>) -> String {
        self.signing_input_encoded(&b64::encode(payload))
    }

    fn signing_input_encoded(&self, encoded_payload: &str) -> String {
        let protected = self.protected.raw().map(String::as_str).unwrap_or_default();
        format!("{protected}.{encoded_payload}")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// [`JWS`] in its flattened or general JSON serialization, see [`rfc7515, section 7.2`]
///
/// [`rfc7515, section 7.2`]: https://datatracker.ietf.org/doc/html/rfc7515#section-7.2
pub struct JWS {
    #[serde(serialize_with = "serialize_payload", deserialize_with = "deserialize_payload")]
    payload: DualValue<Base64Url>,
    #[serde(flatten)]
    signature: JWSSignature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signatures: Option<Vec<JWSSignature>>,
}

impl JWS {
    /// Create an unsigned [`JWS`] for the given payload.
    pub fn new(payload: impl AsRef<[u8]>) -> Self {
        Self {
            payload: DualValue::from_bytes(payload.as_ref()),
            ..Default::default()
        }
    }

    /// Create a [`JWS`] signed once by the given [`Signer`].
    ///
    /// The protected header can be customized before the signer adds its own
    /// headers and signs it.
    pub fn sign(
        payload: impl AsRef<[u8]>,
        signer: &impl Signer,
        customize: impl FnOnce(&mut JWSHeader),
    ) -> Result<Self, OpaqueError> {
        let mut jws = Self::new(payload);
        jws.add_signature(signer, customize)?;
        Ok(jws)
    }

    /// Decode a [`JWS`] from its compact serialization.
    pub fn from_compact(compact: &str) -> Result<Self, OpaqueError> {
        compact.parse::<JWSCompact>()?.decode()
    }

    /// The payload.
    pub fn payload(&self) -> &DualValue<Base64Url> {
        &self.payload
    }

    /// Mutable access to the payload.
    ///
    /// Changing the payload invalidates existing signatures.
    pub fn payload_mut(&mut self) -> &mut DualValue<Base64Url> {
        &mut self.payload
    }

    /// The top level signature of the flattened serialization.
    pub fn signature(&self) -> &JWSSignature {
        &self.signature
    }

    /// Mutable access to the top level signature.
    pub fn signature_mut(&mut self) -> &mut JWSSignature {
        &mut self.signature
    }

    /// The signatures of the general serialization, if used.
    pub fn signatures(&self) -> Option<&[JWSSignature]> {
        self.signatures.as_deref()
    }

    /// Mutable access to the signatures of the general serialization, if used.
    pub fn signatures_mut(&mut self) -> Option<&mut Vec<JWSSignature>> {
        self.signatures.as_mut()
    }

    generate_set_and_with! {
        /// Set the signatures of the general serialization
        ///
        /// Once set, this [`JWS`] serializes with a `signatures` array.
        /// Clearing the top level signature is up to the caller,
        /// as both would end up in the output.
        pub fn signatures(mut self, signatures: Option<Vec<JWSSignature>>) -> Self {
            self.signatures = signatures;
            self
        }
    }

    /// All signatures, whether stored at the top level or in `signatures`.
    pub fn iter_signatures(&self) -> impl Iterator<Item = &JWSSignature> {
        let flattened = self.signature.is_signed().then_some(&self.signature);
        flattened
            .into_iter()
            .chain(self.signatures.iter().flatten())
    }

    /// The signing input of the top level signature.
    pub fn signing_input(&self) -> String {
        self.signature.signing_input_encoded(self.encoded_payload())
    }

    fn encoded_payload(&self) -> &str {
        self.payload.encoded().unwrap_or_default()
    }

    /// Sign this [`JWS`] (again) with the given [`Signer`].
    ///
    /// An unsigned [`JWS`] gets the signature at the top level. A [`JWS`] which was
    /// already signed once moves that signature and the new one into `signatures`,
    /// clearing the top level. Later signatures are appended to `signatures`.
    pub fn add_signature(
        &mut self,
        signer: &impl Signer,
        customize: impl FnOnce(&mut JWSHeader),
    ) -> Result<&mut Self, OpaqueError> {
        let mut header = JWSHeader::new();
        customize(&mut header);
        signer
            .set_headers(&mut header)
            .map_err(|err| OpaqueError::from_boxed(err.into()))?;

        let mut entry = JWSSignature {
            protected: DualValue::try_from_converted(header)?,
            ..Default::default()
        };
        let signing_input = entry.signing_input_encoded(self.encoded_payload());
        let header = entry
            .protected_header()
            .ok_or(InvalidOperation::new("signer produced an empty protected header"))?;

        tracing::trace!(
            alg = ?header.alg(),
            signing_input_len = signing_input.len(),
            "sign JWS"
        );
        let signature = signer
            .sign(header, signing_input.as_bytes())
            .map_err(|err| OpaqueError::from_boxed(err.into()))?;
        entry.signature = DualValue::from_bytes(signature);

        if let Some(signatures) = self.signatures.as_mut() {
            signatures.push(entry);
        } else if self.signature.is_signed() {
            let first = std::mem::take(&mut self.signature);
            self.signatures = Some(vec![first, entry]);
        } else {
            self.signature = entry;
        }
        Ok(self)
    }

    /// Verify every signature of this [`JWS`] with the given [`Verifier`].
    ///
    /// Fails if any signature is invalid, or if there are no signatures at all.
    pub fn verify(&self, verifier: &impl Verifier) -> Result<(), OpaqueError> {
        let encoded_payload = self.encoded_payload();
        let mut verified = 0usize;
        for entry in self.iter_signatures() {
            let header = entry
                .protected_header()
                .ok_or(InvalidOperation::new("signature without protected header"))?;
            let signature = entry
                .signature()
                .bytes()
                .ok_or(InvalidOperation::new("signature entry without signature"))?;
            let signing_input = entry.signing_input_encoded(encoded_payload);

            tracing::trace!(
                alg = ?header.alg(),
                signing_input_len = signing_input.len(),
                "verify JWS signature"
            );
            verifier
                .verify(header, signing_input.as_bytes(), signature)
                .map_err(|err| OpaqueError::from_boxed(err.into()))?;
            verified += 1;
        }

        if verified == 0 {
            return Err(InvalidOperation::new("JWS has no signatures to verify").into());
        }
        Ok(())
    }

    /// Create the compact serialization `protected.payload.signature`.
    ///
    /// This is only possible for a [`JWS`] with exactly one signature,
    /// stored at the top level and without unprotected header.
    pub fn to_compact(&self) -> Result<JWSCompact, OpaqueError> {
        if self.signatures.as_ref().is_some_and(|s| !s.is_empty()) {
            return Err(InvalidOperation::new(
                "compact serialization supports a single signature only",
            )
            .into());
        }
        if !self.signature.is_signed() {
            return Err(InvalidOperation::new("compact serialization requires a signature").into());
        }
        if self.signature.header.is_some() {
            return Err(InvalidOperation::new(
                "compact serialization does not support unprotected headers",
            )
            .into());
        }

        let signature = self.signature.signature.encoded().unwrap_or_default();
        Ok(JWSCompact(format!("{}.{signature}", self.signing_input())))
    }
}

// `payload` is a required member, an empty payload is written as `""`
fn serialize_payload<S>(payload: &DualValue<Base64Url>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(payload.encoded().unwrap_or_default())
}

fn deserialize_payload<'de, D>(deserializer: D) -> Result<DualValue<Base64Url>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let payload = String::deserialize(deserializer)?;
    DualValue::try_from_raw(payload).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// [`JWSCompact`] is a compact `JWS` representation as defined in [`rfc7515, section 7.1`]
///
/// [`rfc7515, section 7.1`]: https://datatracker.ietf.org/doc/html/rfc7515#section-7.1
#[serde(try_from = "String", into = "String")]
pub struct JWSCompact(String);

impl JWSCompact {
    /// The compact serialization.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the three segments into a [`JWS`].
    pub fn decode(&self) -> Result<JWS, OpaqueError> {
        let (protected, payload, signature) = split_compact(&self.0)?;
        let signature = JWSSignature {
            protected: DualValue::try_from_raw(protected.to_owned())?,
            header: None,
            signature: DualValue::try_from_raw(signature.to_owned())?,
        };
        Ok(JWS {
            payload: DualValue::try_from_raw(payload.to_owned())?,
            signature,
            signatures: None,
        })
    }
}

fn split_compact(compact: &str) -> Result<(&str, &str, &str), InvalidOperation> {
    let mut segments = compact.split('.');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(protected), Some(payload), Some(signature), None) => {
            Ok((protected, payload, signature))
        }
        _ => Err(InvalidOperation::new(
            "compact serialization requires exactly three segments",
        )),
    }
}

impl FromStr for JWSCompact {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (protected, payload, signature) = split_compact(s)?;
        for (name, segment) in [
            ("protected", protected),
            ("payload", payload),
            ("signature", signature),
        ] {
            b64::decode(segment).with_context(|| format!("decode compact {name} segment"))?;
        }
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for JWSCompact {
    type Error = OpaqueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JWSCompact> for String {
    fn from(value: JWSCompact) -> Self {
        value.0
    }
}

impl fmt::Display for JWSCompact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
