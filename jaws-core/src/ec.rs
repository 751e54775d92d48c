//! ECDSA bindings for the JOSE model, backed by [`aws_lc_rs`]

use aws_lc_rs::{
    encoding::AsBigEndian,
    pkcs8::Document,
    rand::SystemRandom,
    signature::{
        self, ECDSA_P256_SHA256_FIXED, ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED,
        ECDSA_P384_SHA384_FIXED_SIGNING, ECDSA_P521_SHA512_FIXED, ECDSA_P521_SHA512_FIXED_SIGNING,
        EcdsaKeyPair, EcdsaSigningAlgorithm, EcdsaVerificationAlgorithm, KeyPair,
    },
};
use jaws_error::{ErrorContext, OpaqueError};
use std::fmt;

use crate::{
    error::{InvalidArgument, KeyImportError, UnsupportedAlgorithm},
    jwa::JWA,
    jwk::{JWK, JWKEc, JWKEllipticCurves, JWKType, JWKUse},
    jws::{JWSHeader, Signer},
};

fn signing_algorithm(curve: JWKEllipticCurves) -> &'static EcdsaSigningAlgorithm {
    match curve {
        JWKEllipticCurves::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
        JWKEllipticCurves::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
        JWKEllipticCurves::P521 => &ECDSA_P521_SHA512_FIXED_SIGNING,
    }
}

fn verification_algorithm(curve: JWKEllipticCurves) -> &'static EcdsaVerificationAlgorithm {
    match curve {
        JWKEllipticCurves::P256 => &ECDSA_P256_SHA256_FIXED,
        JWKEllipticCurves::P384 => &ECDSA_P384_SHA384_FIXED,
        JWKEllipticCurves::P521 => &ECDSA_P521_SHA512_FIXED,
    }
}

/// [`EcdsaKey`] which is used to sign a [`JWS`](crate::jws::JWS)
///
/// This contains the private and public key of a single named curve,
/// signatures use the fixed-size `r || s` encoding required by JOSE.
pub struct EcdsaKey {
    rng: SystemRandom,
    curve: JWKEllipticCurves,
    inner: EcdsaKeyPair,
}

impl fmt::Debug for EcdsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

impl EcdsaKey {
    /// Create a new [`EcdsaKey`] from the given [`EcdsaKeyPair`]
    ///
    /// The key pair has to be created for the given curve.
    pub fn new(
        key_pair: EcdsaKeyPair,
        curve: JWKEllipticCurves,
        rng: SystemRandom,
    ) -> Result<Self, OpaqueError> {
        // 0x04 prefix + x + y
        let expected = 1 + 2 * curve.coordinate_size();
        if key_pair.public_key().as_ref().len() != expected {
            return Err(InvalidArgument::new(
                "crv",
                curve.as_str(),
                "key pair was not created for this curve",
            )
            .into());
        }
        Ok(Self {
            rng,
            curve,
            inner: key_pair,
        })
    }

    /// Generate a new [`EcdsaKey`] on the given curve
    pub fn generate(curve: JWKEllipticCurves) -> Result<Self, OpaqueError> {
        let key_pair =
            EcdsaKeyPair::generate(signing_algorithm(curve)).context("generate EcdsaKeyPair")?;
        Self::new(key_pair, curve, SystemRandom::new())
    }

    /// Create a new [`EcdsaKey`] from the given pkcs8 der
    pub fn from_pkcs8_der(
        pkcs8_der: &[u8],
        curve: JWKEllipticCurves,
        rng: SystemRandom,
    ) -> Result<Self, OpaqueError> {
        let key_pair = EcdsaKeyPair::from_pkcs8(signing_algorithm(curve), pkcs8_der)
            .context("create EcdsaKeyPair from pkcs8")?;
        Self::new(key_pair, curve, rng)
    }

    /// Import a private EC [`JWK`]
    ///
    /// `crv`, `x`, `y` and `d` are required, the coordinates must
    /// match the size of the curve.
    pub fn from_jwk(jwk: &JWKEc) -> Result<Self, OpaqueError> {
        let curve = jwk
            .curve()
            .ok_or_else(|| KeyImportError::missing_parameter(JWKType::EC, "crv"))?;
        let point = public_point(jwk, curve)?;
        let d = required_coordinate(jwk.d().bytes(), "d", curve)?;

        let key_pair =
            EcdsaKeyPair::from_private_key_and_public_key(signing_algorithm(curve), d, &point)
                .map_err(|err| {
                    tracing::debug!(%curve, "EC key import rejected by provider");
                    KeyImportError::provider(JWKType::EC, err)
                })?;
        Self::new(key_pair, curve, SystemRandom::new())
    }

    /// Create pkcs8 der for the current [`EcdsaKeyPair`]
    pub fn pkcs8_der(&self) -> Result<(JWKEllipticCurves, Document), OpaqueError> {
        let doc = self
            .inner
            .to_pkcs8v1()
            .context("create pkcs8 der from keypair")?;
        Ok((self.curve, doc))
    }

    /// The named curve of this key.
    pub fn curve(&self) -> JWKEllipticCurves {
        self.curve
    }

    /// The algorithm this key signs with.
    pub fn alg(&self) -> JWA {
        self.curve.into()
    }

    /// Create a public [`JWKEc`] for this [`EcdsaKey`]
    pub fn create_jwk(&self) -> JWKEc {
        let point = self.inner.public_key().as_ref();
        let coordinates = point.get(1..).unwrap_or_default();
        let (x, y) = coordinates.split_at(coordinates.len() / 2);

        let mut jwk = JWKEc::from_public_point(self.curve, x, y);
        jwk.parameters_mut()
            .set_alg(self.alg())
            .set_key_use(JWKUse::Signature);
        jwk
    }

    /// Export this key as [`JWKEc`], including the private scalar if requested
    pub fn export_jwk(&self, include_private: bool) -> Result<JWKEc, OpaqueError> {
        let mut jwk = self.create_jwk();
        if include_private {
            let d = self
                .inner
                .private_key()
                .as_be_bytes()
                .context("export EC private scalar")?;
            jwk.set_d(d.as_ref().to_vec());
        }
        Ok(jwk)
    }
}

impl Signer for EcdsaKey {
    type Error = OpaqueError;

    fn set_headers(&self, header: &mut JWSHeader) -> Result<(), Self::Error> {
        let alg = self.alg();
        header.require_alg(JWKType::EC, alg.clone(), |requested| *requested == alg)?;
        if header.jwk().is_none() {
            header.set_jwk(JWK::from(self.create_jwk()));
        }
        Ok(())
    }

    fn sign(&self, header: &JWSHeader, signing_input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let alg = self.alg();
        match header.alg() {
            Some(requested) if *requested == alg => (),
            Some(requested) => {
                return Err(UnsupportedAlgorithm::new(requested.clone(), JWKType::EC).into());
            }
            None => return Err(UnsupportedAlgorithm::missing(JWKType::EC).into()),
        }

        let signature = self
            .inner
            .sign(&self.rng, signing_input)
            .context("sign signing input with ECDSA key")?;
        Ok(signature.as_ref().to_vec())
    }
}

impl JWKEc {
    /// Convert this [`JWKEc`] to an unparsed public key which can be used to verify signatures
    ///
    /// Warning no verification is done on this key until `.verify()` is called
    pub fn unparsed_public_key(
        &self,
    ) -> Result<signature::UnparsedPublicKey<Vec<u8>>, OpaqueError> {
        let curve = self
            .curve()
            .ok_or_else(|| KeyImportError::missing_parameter(JWKType::EC, "crv"))?;
        let point = public_point(self, curve)?;
        Ok(signature::UnparsedPublicKey::new(
            verification_algorithm(curve),
            point,
        ))
    }
}

fn required_coordinate<'a>(
    value: Option<&'a [u8]>,
    parameter: &'static str,
    curve: JWKEllipticCurves,
) -> Result<&'a [u8], KeyImportError> {
    let value = value.ok_or_else(|| KeyImportError::missing_parameter(JWKType::EC, parameter))?;
    if value.len() != curve.coordinate_size() {
        return Err(KeyImportError::invalid_parameter(
            JWKType::EC,
            parameter,
            "length does not match the curve",
        ));
    }
    Ok(value)
}

/// uncompressed point: 0x04 prefix + x + y
fn public_point(jwk: &JWKEc, curve: JWKEllipticCurves) -> Result<Vec<u8>, KeyImportError> {
    let x = required_coordinate(jwk.x().bytes(), "x", curve)?;
    let y = required_coordinate(jwk.y().bytes(), "y", curve)?;

    let mut point = Vec::with_capacity(1 + x.len() + y.len());
    point.push(0x04);
    point.extend_from_slice(x);
    point.extend_from_slice(y);
    Ok(point)
}

pub(crate) fn verify(
    key: &JWKEc,
    alg: &JWA,
    signing_input: &[u8],
    signature: &[u8],
) -> Result<(), OpaqueError> {
    let curve = key
        .curve()
        .ok_or_else(|| KeyImportError::missing_parameter(JWKType::EC, "crv"))?;
    if *alg != JWA::from(curve) {
        return Err(UnsupportedAlgorithm::new(alg.clone(), JWKType::EC).into());
    }
    key.unparsed_public_key()?
        .verify(signing_input, signature)
        .context("verify ECDSA signature")
}
