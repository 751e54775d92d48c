use iri_string::types::UriString;
use jaws_error::{ErrorContext, OpaqueError};
use jaws_utils::macros::generate_set_and_with;
use mime::Mime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    b64,
    dual::{Conversion, DualValue},
    error::{InvalidArgument, UnsupportedAlgorithm},
    jwa::JWA,
    jwk::{JWK, JWKType},
};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// JOSE header of a [`JWS`](super::JWS), see [`rfc7515`] section 4
///
/// Members without a dedicated field are kept in the
/// [extension members](Self::extension).
///
/// [`rfc7515`]: https://datatracker.ietf.org/doc/html/rfc7515#section-4
pub struct JWSHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alg: Option<JWA>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    jku: DualValue<UriReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    jwk: Option<JWK>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kid: Option<String>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    typ: DualValue<MediaType>,
    #[serde(default, skip_serializing_if = "DualValue::is_none")]
    cty: DualValue<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crit: Option<Vec<String>>,
    #[serde(flatten)]
    extension: Map<String, Value>,
}

impl JWSHeader {
    /// Create an empty [`JWSHeader`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Algorithm used to secure the JWS
    pub fn alg(&self) -> Option<&JWA> {
        self.alg.as_ref()
    }

    generate_set_and_with! {
        /// Set the algorithm used to secure the JWS
        pub fn alg(mut self, alg: Option<JWA>) -> Self {
            self.alg = alg;
            self
        }
    }

    /// JWK Set URL
    pub fn jku(&self) -> &DualValue<UriReference> {
        &self.jku
    }

    /// Mutable access to the JWK Set URL
    pub fn jku_mut(&mut self) -> &mut DualValue<UriReference> {
        &mut self.jku
    }

    generate_set_and_with! {
        /// Set the JWK Set URL, which must be a valid URI
        pub fn jku(mut self, jku: Option<String>) -> Result<Self, OpaqueError> {
            self.jku.try_maybe_set_raw(jku)?;
            Ok(self)
        }
    }

    generate_set_and_with! {
        /// Set the JWK Set URL from an already validated URI
        pub fn jku_uri(mut self, jku: Option<UriString>) -> Result<Self, OpaqueError> {
            self.jku.try_maybe_set_converted(jku)?;
            Ok(self)
        }
    }

    /// Public key that corresponds to the key used to sign the JWS
    pub fn jwk(&self) -> Option<&JWK> {
        self.jwk.as_ref()
    }

    generate_set_and_with! {
        /// Set the public key that corresponds to the key used to sign the JWS
        pub fn jwk(mut self, jwk: Option<JWK>) -> Self {
            self.jwk = jwk;
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

    /// Media type of the complete JWS
    pub fn typ(&self) -> &DualValue<MediaType> {
        &self.typ
    }

    /// Mutable access to the media type of the complete JWS
    pub fn typ_mut(&mut self) -> &mut DualValue<MediaType> {
        &mut self.typ
    }

    generate_set_and_with! {
        /// Set the media type of the complete JWS, as written on the wire
        pub fn typ(mut self, typ: Option<String>) -> Result<Self, OpaqueError> {
            self.typ.try_maybe_set_raw(typ)?;
            Ok(self)
        }
    }

    generate_set_and_with! {
        /// Set the media type of the complete JWS from a [`Mime`]
        ///
        /// `application/<value>` without parameters is written as `<value>`.
        pub fn typ_mime(mut self, typ: Option<Mime>) -> Result<Self, OpaqueError> {
            self.typ.try_maybe_set_converted(typ)?;
            Ok(self)
        }
    }

    /// Media type of the secured content
    pub fn cty(&self) -> &DualValue<MediaType> {
        &self.cty
    }

    /// Mutable access to the media type of the secured content
    pub fn cty_mut(&mut self) -> &mut DualValue<MediaType> {
        &mut self.cty
    }

    generate_set_and_with! {
        /// Set the media type of the secured content, as written on the wire
        pub fn cty(mut self, cty: Option<String>) -> Result<Self, OpaqueError> {
            self.cty.try_maybe_set_raw(cty)?;
            Ok(self)
        }
    }

    generate_set_and_with! {
        /// Set the media type of the secured content from a [`Mime`]
        ///
        /// `application/<value>` without parameters is written as `<value>`.
        pub fn cty_mime(mut self, cty: Option<Mime>) -> Result<Self, OpaqueError> {
            self.cty.try_maybe_set_converted(cty)?;
            Ok(self)
        }
    }

    /// Extensions which must be understood and processed
    pub fn crit(&self) -> Option<&[String]> {
        self.crit.as_deref()
    }

    generate_set_and_with! {
        /// Set the extensions which must be understood and processed
        pub fn crit(mut self, crit: Option<Vec<String>>) -> Self {
            self.crit = crit;
            self
        }
    }

    generate_set_and_with! {
        /// Set a header member without dedicated field
        ///
        /// Warning: this function will replace an already existing member
        pub fn header(mut self, name: String, value: impl Serialize) -> Result<Self, OpaqueError> {
            let value = serde_json::to_value(value).context("convert header value")?;
            self.extension.insert(name, value);
            Ok(self)
        }
    }

    /// Default `alg` to `default` when missing, otherwise require it to be accepted
    /// by the signing key.
    pub(crate) fn require_alg(
        &mut self,
        key_type: JWKType,
        default: JWA,
        accept: impl Fn(&JWA) -> bool,
    ) -> Result<JWA, UnsupportedAlgorithm> {
        match self.alg.clone() {
            None => {
                self.alg = Some(default.clone());
                Ok(default)
            }
            Some(alg) if accept(&alg) => Ok(alg),
            Some(alg) => {
                tracing::debug!(%alg, %key_type, "signer rejected header algorithm");
                Err(UnsupportedAlgorithm::new(alg, key_type))
            }
        }
    }

    /// Members without dedicated field.
    pub fn extension(&self) -> &Map<String, Value> {
        &self.extension
    }

    /// Mutable access to the members without dedicated field.
    pub fn extension_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extension
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// [`Conversion`] between a `typ`/`cty` value and its [`Mime`].
///
/// As allowed by [`rfc7515`] a value without `/` is read as
/// `application/<value>`, and `application/<value>` without
/// parameters is written back in that short form.
///
/// [`rfc7515`]: https://datatracker.ietf.org/doc/html/rfc7515#section-4.1.9
pub struct MediaType;

impl Conversion for MediaType {
    type Raw = String;
    type Converted = Mime;

    fn to_converted(raw: &String) -> Result<Option<Mime>, OpaqueError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let full = if raw.contains('/') {
            raw.to_owned()
        } else {
            format!("application/{raw}")
        };
        let mime = full.parse::<Mime>().map_err(|err| {
            tracing::debug!(%err, "reject invalid media type");
            InvalidArgument::new("media type", raw, "not a valid media type")
                .with_reference("RFC 7515, section 4.1.9")
        })?;
        Ok(Some(mime))
    }

    fn to_raw(converted: &Mime) -> Result<Option<String>, OpaqueError> {
        if converted.type_() == mime::APPLICATION
            && converted.params().next().is_none()
            && let Some((_, short)) = converted.essence_str().split_once('/')
        {
            return Ok(Some(short.to_owned()));
        }
        Ok(Some(converted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// [`Conversion`] between a URI string and a validated [`UriString`].
pub struct UriReference;

impl Conversion for UriReference {
    type Raw = String;
    type Converted = UriString;

    fn to_converted(raw: &String) -> Result<Option<UriString>, OpaqueError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let uri = UriString::try_from(raw.as_str()).map_err(|err| {
            tracing::debug!(%err, "reject invalid URI");
            InvalidArgument::new("jku", raw.as_str(), "not a valid URI")
                .with_reference("RFC 7515, section 4.1.2")
        })?;
        Ok(Some(uri))
    }

    fn to_raw(converted: &UriString) -> Result<Option<String>, OpaqueError> {
        Ok(Some(converted.as_str().to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// [`Conversion`] between the Base64URL `protected` member
/// and the [`JWSHeader`] it encodes.
pub struct ProtectedHeader;

impl Conversion for ProtectedHeader {
    type Raw = String;
    type Converted = JWSHeader;

    fn to_converted(raw: &String) -> Result<Option<JWSHeader>, OpaqueError> {
        let Some(json) = b64::decode_optional(Some(raw.as_str()))? else {
            return Ok(None);
        };
        let header = serde_json::from_slice(&json).context("decode protected JWS header")?;
        Ok(Some(header))
    }

    fn to_raw(converted: &JWSHeader) -> Result<Option<String>, OpaqueError> {
        let json = serde_json::to_vec(converted).context("encode protected JWS header")?;
        Ok(Some(b64::encode(json)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_err;

    #[test]
    fn media_type_short_form() {
        let typ = DualValue::<MediaType>::try_from_raw("jose+json".to_owned()).unwrap();
        assert_eq!(
            typ.converted().map(Mime::essence_str),
            Some("application/jose+json")
        );

        let typ = DualValue::<MediaType>::try_from_converted(mime::APPLICATION_JSON).unwrap();
        assert_eq!(typ.raw().map(String::as_str), Some("json"));

        let typ = DualValue::<MediaType>::try_from_converted(mime::TEXT_PLAIN_UTF_8).unwrap();
        assert_eq!(
            typ.raw().map(String::as_str),
            Some("text/plain; charset=utf-8")
        );

        assert_err!(DualValue::<MediaType>::try_from_raw("not a/media type".to_owned()));
    }

    #[test]
    fn typed_media_type_uses_short_form_on_the_wire() {
        let header = JWSHeader::new()
            .try_with_typ_mime("application/jose".parse().unwrap())
            .unwrap()
            .try_with_cty_mime(mime::TEXT_PLAIN_UTF_8)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&header).unwrap(),
            serde_json::json!({"typ":"jose","cty":"text/plain; charset=utf-8"})
        );

        // the raw setter keeps the value as given
        let mut header = JWSHeader::new()
            .try_with_typ("application/jose".to_owned())
            .unwrap();
        assert_eq!(header.typ().raw().map(String::as_str), Some("application/jose"));

        header
            .typ_mut()
            .try_set_converted("application/jwt".parse().unwrap())
            .unwrap();
        assert_eq!(header.typ().raw().map(String::as_str), Some("jwt"));
        assert_eq!(
            header.typ().converted().map(Mime::essence_str),
            Some("application/jwt")
        );
    }

    #[test]
    fn jku_from_uri() {
        let uri = UriString::try_from("https://example.com/keys").unwrap();
        let header = JWSHeader::new().try_with_jku_uri(uri).unwrap();
        assert_eq!(
            serde_json::to_value(&header).unwrap(),
            serde_json::json!({"jku":"https://example.com/keys"})
        );
    }

    #[test]
    fn jku_is_validated() {
        let header = JWSHeader::new()
            .try_with_jku("https://example.com/jwks.json".to_owned())
            .unwrap();
        assert_eq!(
            header.jku().converted().map(|uri| uri.as_str()),
            Some("https://example.com/jwks.json")
        );

        let err = assert_err!(JWSHeader::new().try_with_jku("not a uri".to_owned()));
        assert!(err.is::<InvalidArgument>());
    }

    #[test]
    fn header_members_round_trip() {
        let header: JWSHeader = serde_json::from_str(
            r#"{"alg":"ES256","kid":"e9bc097a","typ":"JWT","crit":["exp"],"exp":1363284000}"#,
        )
        .unwrap();
        assert_eq!(header.alg(), Some(&JWA::ES256));
        assert_eq!(header.kid(), Some("e9bc097a"));
        assert_eq!(header.typ().raw().map(String::as_str), Some("JWT"));
        assert_eq!(header.crit(), Some(&["exp".to_owned()][..]));
        assert_eq!(header.extension().get("exp"), Some(&Value::from(1363284000)));

        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"alg":"ES256","kid":"e9bc097a","typ":"JWT","crit":["exp"],"exp":1363284000})
        );
    }

    #[test]
    fn protected_header_is_base64url_json() {
        let protected = DualValue::<ProtectedHeader>::try_from_raw(
            "eyJhbGciOiJSUzI1NiJ9".to_owned(),
        )
        .unwrap();
        assert_eq!(
            protected.converted().and_then(JWSHeader::alg),
            Some(&JWA::RS256)
        );

        let protected =
            DualValue::<ProtectedHeader>::try_from_converted(JWSHeader::new().with_alg(JWA::RS256))
                .unwrap();
        assert_eq!(
            protected.raw().map(String::as_str),
            Some("eyJhbGciOiJSUzI1NiJ9")
        );
    }
}
