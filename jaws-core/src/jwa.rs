use jaws_utils::macros::enums::enum_builder;

enum_builder! {
    /// [`JWA`] or JSON Web Algorithms as defined in [`rfc7518`]
    ///
    /// Only the digital signature and MAC algorithms of section 3 are enumerated,
    /// any other `alg` value is preserved verbatim as [`JWA::Unknown`].
    /// RSASSA-PSS is recognised but none of the signers in this crate bind it.
    ///
    /// Values are case-sensitive, `hs256` is not [`JWA::HS256`].
    ///
    /// [`rfc7518`]: https://datatracker.ietf.org/doc/html/rfc7518
    @String
    @CaseSensitive
    pub enum JWA {
        /// HMAC using SHA-256 (Required)
        HS256 => "HS256",
        /// HMAC using SHA-384 (Optional)
        HS384 => "HS384",
        /// HMAC using SHA-512 (Optional)
        HS512 => "HS512",
        /// RSASSA-PKCS1-v1_5 using SHA-256 (Recommended)
        RS256 => "RS256",
        /// RSASSA-PKCS1-v1_5 using SHA-384 (Optional)
        RS384 => "RS384",
        /// RSASSA-PKCS1-v1_5 using SHA-512 (Optional)
        RS512 => "RS512",
        /// ECDSA using P-256 and SHA-256 (Recommended+)
        ES256 => "ES256",
        /// ECDSA using P-384 and SHA-384 (Optional)
        ES384 => "ES384",
        /// ECDSA using P-521 and SHA-512 (Optional)
        ES512 => "ES512",
        /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256 (Optional)
        PS256 => "PS256",
        /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384 (Optional)
        PS384 => "PS384",
        /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512 (Optional)
        PS512 => "PS512",
    }
}

impl JWA {
    /// Returns true for the HMAC family (`HS*`).
    pub fn is_hmac(&self) -> bool {
        matches!(self, Self::HS256 | Self::HS384 | Self::HS512)
    }

    /// Returns true for the RSASSA-PKCS1-v1_5 family (`RS*`).
    pub fn is_rsa_pkcs1(&self) -> bool {
        matches!(self, Self::RS256 | Self::RS384 | Self::RS512)
    }

    /// Returns true for the RSASSA-PSS family (`PS*`).
    pub fn is_rsa_pss(&self) -> bool {
        matches!(self, Self::PS256 | Self::PS384 | Self::PS512)
    }

    /// Returns true for the ECDSA family (`ES*`).
    pub fn is_ecdsa(&self) -> bool {
        matches!(self, Self::ES256 | Self::ES384 | Self::ES512)
    }
}
