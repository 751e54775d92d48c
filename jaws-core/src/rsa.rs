//! RSA bindings for the JOSE model, backed by the [`rsa`](::rsa) crate
//!
//! Only RSASSA-PKCS1-v1_5 (`RS256`, `RS384`, `RS512`) is bound,
//! RSASSA-PSS identifiers are rejected as unsupported.

use ::rsa::{
    BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey,
    rand_core::OsRng,
    traits::{PrivateKeyParts, PublicKeyParts},
};
use jaws_error::{ErrorContext, OpaqueError};
use sha2::{Digest as _, Sha256, Sha384, Sha512};

use crate::{
    dual::{Base64Url, DualValue},
    error::{KeyImportError, UnsupportedAlgorithm},
    jwa::JWA,
    jwk::{JWK, JWKRsa, JWKType},
    jws::{JWSHeader, Signer},
};

/// Generate a new [`RsaPrivateKey`] with a modulus of `bits` bits.
pub fn generate_private_key(bits: usize) -> Result<RsaPrivateKey, OpaqueError> {
    RsaPrivateKey::new(&mut OsRng, bits).context("generate RSA private key")
}

/// hash the signing input and select the matching PKCS#1 v1.5 scheme
fn pkcs1v15_digest(alg: &JWA, signing_input: &[u8]) -> Option<(Pkcs1v15Sign, Vec<u8>)> {
    match alg {
        JWA::RS256 => Some((
            Pkcs1v15Sign::new::<Sha256>(),
            Sha256::digest(signing_input).to_vec(),
        )),
        JWA::RS384 => Some((
            Pkcs1v15Sign::new::<Sha384>(),
            Sha384::digest(signing_input).to_vec(),
        )),
        JWA::RS512 => Some((
            Pkcs1v15Sign::new::<Sha512>(),
            Sha512::digest(signing_input).to_vec(),
        )),
        _ => None,
    }
}

fn big_uint(value: &BigUint) -> DualValue<Base64Url> {
    DualValue::from_bytes(value.to_bytes_be())
}

fn required_big_uint(
    value: &DualValue<Base64Url>,
    parameter: &'static str,
) -> Result<BigUint, KeyImportError> {
    value
        .bytes()
        .map(BigUint::from_bytes_be)
        .ok_or_else(|| KeyImportError::missing_parameter(JWKType::RSA, parameter))
}

impl JWKRsa {
    /// Export the public parameters `n` and `e` of the given key.
    pub fn from_public_key(key: &RsaPublicKey) -> Self {
        let mut jwk = Self::new();
        *jwk.n_mut() = big_uint(key.n());
        *jwk.e_mut() = big_uint(key.e());
        jwk
    }

    /// Export the given private key.
    ///
    /// Without `include_private` only the public parameters are exported,
    /// otherwise `d` and (for two-prime keys) the CRT parameters are added.
    pub fn from_private_key(key: &RsaPrivateKey, include_private: bool) -> Self {
        let mut jwk = Self::from_public_key(key.as_ref());
        if !include_private {
            return jwk;
        }

        *jwk.d_mut() = big_uint(key.d());
        if let [p, q] = key.primes() {
            *jwk.p_mut() = big_uint(p);
            *jwk.q_mut() = big_uint(q);
            if let Some(dp) = key.dp() {
                *jwk.dp_mut() = big_uint(dp);
            }
            if let Some(dq) = key.dq() {
                *jwk.dq_mut() = big_uint(dq);
            }
            if let Some(qi) = key.crt_coefficient() {
                *jwk.qi_mut() = big_uint(&qi);
            }
        } else {
            tracing::debug!(
                primes = key.primes().len(),
                "skip CRT parameters for multi-prime RSA key"
            );
        }
        jwk
    }

    /// Import the public key described by `n` and `e`.
    pub fn to_public_key(&self) -> Result<RsaPublicKey, OpaqueError> {
        let n = required_big_uint(self.n(), "n")?;
        let e = required_big_uint(self.e(), "e")?;
        let key = RsaPublicKey::new(n, e).map_err(|err| {
            tracing::debug!("RSA public key import rejected by provider");
            KeyImportError::provider(JWKType::RSA, err)
        })?;
        Ok(key)
    }

    /// Import the private key described by `n`, `e`, `d`, `p` and `q`.
    ///
    /// The CRT parameters `dp`, `dq` and `qi` are recomputed from the primes.
    pub fn to_private_key(&self) -> Result<RsaPrivateKey, OpaqueError> {
        let n = required_big_uint(self.n(), "n")?;
        let e = required_big_uint(self.e(), "e")?;
        let d = required_big_uint(self.d(), "d")?;
        let p = required_big_uint(self.p(), "p")?;
        let q = required_big_uint(self.q(), "q")?;

        let import = || {
            let mut key = RsaPrivateKey::from_components(n, e, d, vec![p, q])?;
            key.validate()?;
            key.precompute()?;
            Ok::<_, ::rsa::Error>(key)
        };
        let key = import().map_err(|err| {
            tracing::debug!("RSA private key import rejected by provider");
            KeyImportError::provider(JWKType::RSA, err)
        })?;
        Ok(key)
    }
}

impl From<&RsaPublicKey> for JWK {
    fn from(value: &RsaPublicKey) -> Self {
        Self::RSA(JWKRsa::from_public_key(value))
    }
}

impl Signer for RsaPrivateKey {
    type Error = OpaqueError;

    fn set_headers(&self, header: &mut JWSHeader) -> Result<(), Self::Error> {
        header.require_alg(JWKType::RSA, JWA::RS256, JWA::is_rsa_pkcs1)?;
        if header.jwk().is_none() {
            header.set_jwk(JWK::from(&self.to_public_key()));
        }
        Ok(())
    }

    fn sign(&self, header: &JWSHeader, signing_input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let alg = header
            .alg()
            .ok_or_else(|| UnsupportedAlgorithm::missing(JWKType::RSA))?;
        let (scheme, hashed) = pkcs1v15_digest(alg, signing_input)
            .ok_or_else(|| UnsupportedAlgorithm::new(alg.clone(), JWKType::RSA))?;
        self.sign_with_rng(&mut OsRng, scheme, &hashed)
            .context("sign signing input with RSA key")
    }
}

pub(crate) fn verify(
    key: &JWKRsa,
    alg: &JWA,
    signing_input: &[u8],
    signature: &[u8],
) -> Result<(), OpaqueError> {
    let (scheme, hashed) = pkcs1v15_digest(alg, signing_input)
        .ok_or_else(|| UnsupportedAlgorithm::new(alg.clone(), JWKType::RSA))?;
    key.to_public_key()?
        .verify(scheme, &hashed, signature)
        .context("verify RSA signature")
}
