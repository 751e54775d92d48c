//! Concrete error kinds surfaced by the JOSE model.
//!
//! Fallible functions in this crate return an [`OpaqueError`],
//! use [`OpaqueError::is`] or [`OpaqueError::downcast_ref`] to
//! recover one of the error kinds defined here. Provider failures stay
//! reachable as source of a [`KeyImportError`], see [`OpaqueError::find`].

use jaws_error::{BoxError, OpaqueError};
use std::fmt;

use crate::{jwa::JWA, jwk::JWKType};

#[derive(Debug, Clone, PartialEq, Eq)]
/// error identifying malformed Base64URL input
pub enum InvalidBase64Url {
    /// the input length modulo 4 equals 1, which no padding can repair
    InvalidLength(usize),
    /// the input contains a symbol outside of the Base64URL alphabet,
    /// or non-canonical trailing bits
    InvalidSymbol(base64::DecodeError),
}

impl fmt::Display for InvalidBase64Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "invalid base64url: invalid length {len} (length mod 4 equals 1)"
            ),
            Self::InvalidSymbol(err) => write!(f, "invalid base64url: {err}"),
        }
    }
}

impl std::error::Error for InvalidBase64Url {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLength(_) => None,
            Self::InvalidSymbol(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// error identifying an invalid value for a JOSE parameter
pub struct InvalidArgument {
    parameter: &'static str,
    value: String,
    reason: &'static str,
    reference: Option<&'static str>,
}

impl InvalidArgument {
    /// Create a new [`InvalidArgument`] for the given parameter and offending value.
    pub fn new(parameter: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            parameter,
            value: value.into(),
            reason,
            reference: None,
        }
    }

    /// Attach a reference to the RFC section defining the parameter.
    #[must_use]
    pub fn with_reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Name of the parameter which received the invalid value.
    pub fn parameter(&self) -> &'static str {
        self.parameter
    }

    /// The offending value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The RFC section defining the parameter, if any.
    pub fn reference(&self) -> Option<&'static str> {
        self.reference
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value '{}' for '{}': {}",
            self.value, self.parameter, self.reason
        )?;
        if let Some(reference) = self.reference {
            write!(f, " (see {reference})")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidArgument {}

#[derive(Debug)]
/// error identifying a failure to turn a JWK into a native key
pub struct KeyImportError {
    key_type: JWKType,
    kind: KeyImportErrorKind,
}

#[derive(Debug)]
enum KeyImportErrorKind {
    MissingParameter(&'static str),
    InvalidParameter {
        parameter: &'static str,
        reason: &'static str,
    },
    Provider(BoxError),
}

impl KeyImportError {
    /// A required JWK parameter is absent.
    pub fn missing_parameter(key_type: JWKType, parameter: &'static str) -> Self {
        Self {
            key_type,
            kind: KeyImportErrorKind::MissingParameter(parameter),
        }
    }

    /// A JWK parameter is present but cannot be used as-is.
    pub fn invalid_parameter(
        key_type: JWKType,
        parameter: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            key_type,
            kind: KeyImportErrorKind::InvalidParameter { parameter, reason },
        }
    }

    /// The crypto provider rejected the key material.
    pub fn provider(key_type: JWKType, error: impl Into<BoxError>) -> Self {
        Self {
            key_type,
            kind: KeyImportErrorKind::Provider(error.into()),
        }
    }

    /// The key type of the JWK which failed to import.
    pub fn key_type(&self) -> &JWKType {
        &self.key_type
    }

    /// The JWK parameter responsible for the failure, if known.
    pub fn parameter(&self) -> Option<&'static str> {
        match &self.kind {
            KeyImportErrorKind::MissingParameter(parameter)
            | KeyImportErrorKind::InvalidParameter { parameter, .. } => Some(*parameter),
            KeyImportErrorKind::Provider(_) => None,
        }
    }
}

impl fmt::Display for KeyImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            KeyImportErrorKind::MissingParameter(parameter) => write!(
                f,
                "failed to import {} key: missing required parameter '{parameter}'",
                self.key_type
            ),
            KeyImportErrorKind::InvalidParameter { parameter, reason } => write!(
                f,
                "failed to import {} key: invalid parameter '{parameter}': {reason}",
                self.key_type
            ),
            KeyImportErrorKind::Provider(err) => {
                write!(f, "failed to import {} key: {err}", self.key_type)
            }
        }
    }
}

impl std::error::Error for KeyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            KeyImportErrorKind::Provider(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// error identifying an algorithm which is not bound to the key family in use
pub struct UnsupportedAlgorithm {
    alg: Option<JWA>,
    key_type: JWKType,
}

impl UnsupportedAlgorithm {
    /// Create a new [`UnsupportedAlgorithm`] error.
    pub fn new(alg: JWA, key_type: JWKType) -> Self {
        Self {
            alg: Some(alg),
            key_type,
        }
    }

    /// The header carried no algorithm at all.
    pub fn missing(key_type: JWKType) -> Self {
        Self {
            alg: None,
            key_type,
        }
    }

    /// The rejected algorithm, `None` if it was absent.
    pub fn alg(&self) -> Option<&JWA> {
        self.alg.as_ref()
    }

    /// The key type the algorithm was attempted with.
    pub fn key_type(&self) -> &JWKType {
        &self.key_type
    }
}

impl fmt::Display for UnsupportedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alg {
            Some(alg) => write!(
                f,
                "algorithm '{alg}' is not supported for key type '{}'",
                self.key_type
            ),
            None => write!(f, "missing algorithm for key type '{}'", self.key_type),
        }
    }
}

impl std::error::Error for UnsupportedAlgorithm {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// error identifying an operation which is invalid in the current state
pub struct InvalidOperation(&'static str);

impl InvalidOperation {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self(reason)
    }

    /// Why the operation was refused.
    pub fn reason(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid operation: {}", self.0)
    }
}

impl std::error::Error for InvalidOperation {}

macro_rules! impl_into_opaque {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for OpaqueError {
                fn from(error: $error) -> Self {
                    OpaqueError::from_std(error)
                }
            }
        )+
    };
}

impl_into_opaque!(
    InvalidBase64Url,
    InvalidArgument,
    KeyImportError,
    UnsupportedAlgorithm,
    InvalidOperation,
);
