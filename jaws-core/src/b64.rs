//! Base64URL codec as defined in [`rfc7515`] appendix C.
//!
//! The alphabet is `A-Za-z0-9` plus `-` and `_`, without `=` padding.
//! Encoding uses `+`→`-` and `/`→`_` on top of standard Base64, decoding
//! reverses both substitutions and restores the padding first.
//!
//! [`rfc7515`]: https://datatracker.ietf.org/doc/html/rfc7515#appendix-C

use base64::{
    Engine as _,
    prelude::{BASE64_STANDARD, BASE64_URL_SAFE_NO_PAD},
};
use jaws_error::OpaqueError;

use crate::error::InvalidBase64Url;

/// Encode the given bytes as unpadded Base64URL.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(input)
}

/// Encode the given bytes as unpadded Base64URL,
/// mapping absent or empty input to `None`.
pub fn encode_optional(input: Option<&[u8]>) -> Option<String> {
    input.filter(|bytes| !bytes.is_empty()).map(encode)
}

/// Decode an unpadded Base64URL string.
///
/// Blank input decodes into an empty buffer.
pub fn decode(input: &str) -> Result<Vec<u8>, OpaqueError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let regular = to_regular_base64(input)?;
    BASE64_STANDARD
        .decode(regular)
        .map_err(|err| InvalidBase64Url::InvalidSymbol(err).into())
}

/// Decode an unpadded Base64URL string,
/// mapping absent or blank input to `None`.
pub fn decode_optional(input: Option<&str>) -> Result<Option<Vec<u8>>, OpaqueError> {
    match input {
        Some(input) if !input.trim().is_empty() => decode(input).map(Some),
        _ => Ok(None),
    }
}

/// Turn a Base64URL string into a padded standard Base64 string,
/// without decoding it.
pub fn to_regular_base64(input: &str) -> Result<String, OpaqueError> {
    let padding = match input.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err(InvalidBase64Url::InvalidLength(input.len()).into()),
    };

    let mut output = String::with_capacity(input.len() + padding.len());
    output.extend(input.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        c => c,
    }));
    output.push_str(padding);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn encode_uses_url_safe_alphabet() {
        // standard Base64 of these bytes is "+/+/"
        assert_eq!(encode([0xfb, 0xff, 0xbf]), "-_-_");
        assert_eq!(encode(b"Hello"), "SGVsbG8");
        assert_eq!(encode(br#"{"alg":"RS256"}"#), "eyJhbGciOiJSUzI1NiJ9");
    }

    #[test]
    fn to_regular_base64_restores_padding() {
        assert_eq!(to_regular_base64("SGVsbG8").unwrap(), "SGVsbG8=");
        assert_eq!(to_regular_base64("SGk").unwrap(), "SGk=");
        assert_eq!(to_regular_base64("SA").unwrap(), "SA==");
        assert_eq!(to_regular_base64("-_-_").unwrap(), "+/+/");
    }

    #[test]
    fn decode_accepts_lengths_0_2_3_mod_4() {
        assert_eq!(assert_ok!(decode("SGVs")), b"Hel");
        assert_eq!(assert_ok!(decode("SA")), b"H");
        assert_eq!(assert_ok!(decode("SGk")), b"Hi");
    }

    #[test]
    fn decode_rejects_length_1_mod_4() {
        let err = assert_err!(decode("SGVsb"));
        assert_eq!(
            err.downcast_ref::<InvalidBase64Url>(),
            Some(&InvalidBase64Url::InvalidLength(5))
        );
        assert_err!(to_regular_base64("A"));
    }

    #[test]
    fn decode_rejects_foreign_symbols() {
        let err = assert_err!(decode("SG=s"));
        assert!(matches!(
            err.downcast_ref::<InvalidBase64Url>(),
            Some(InvalidBase64Url::InvalidSymbol(_))
        ));
    }

    #[test]
    fn blank_input_maps_to_absence() {
        assert!(decode("").unwrap().is_empty());
        assert_eq!(decode_optional(None).unwrap(), None);
        assert_eq!(decode_optional(Some("  ")).unwrap(), None);
        assert_eq!(decode_optional(Some("SA")).unwrap(), Some(b"H".to_vec()));
        assert_eq!(encode_optional(None), None);
        assert_eq!(encode_optional(Some(&[][..])), None);
        assert_eq!(encode_optional(Some(&b"H"[..])), Some("SA".to_owned()));
    }

    #[quickcheck]
    fn decode_encode_round_trip(bytes: Vec<u8>) -> bool {
        decode(&encode(&bytes)).map(|decoded| decoded == bytes).unwrap_or(false)
    }

    #[quickcheck]
    fn encode_never_emits_padding_or_standard_symbols(bytes: Vec<u8>) -> bool {
        !encode(bytes).contains(['=', '+', '/'])
    }
}
