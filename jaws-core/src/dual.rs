//! Fields which carry both their wire representation and their domain value.
//!
//! A [`DualValue`] stores the raw (serialized) value together with the value
//! it converts into, using a [`Conversion`] to derive one side from the other.
//! Both sides are computed at the moment a value is set, so reading either
//! side never runs a conversion again, and a failed conversion leaves the
//! field untouched.

use jaws_error::OpaqueError;
use jaws_utils::macros::generate_set_and_with;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

use crate::b64;

/// A pair of conversion functions between a raw and a converted value.
///
/// Either function may map its input to `None`, in which case the
/// [`DualValue`] holding it becomes empty on both sides.
pub trait Conversion {
    /// The wire representation.
    type Raw;
    /// The domain value.
    type Converted;

    /// Convert a raw value into its domain value.
    fn to_converted(raw: &Self::Raw) -> Result<Option<Self::Converted>, OpaqueError>;

    /// Convert a domain value into its raw representation.
    fn to_raw(converted: &Self::Converted) -> Result<Option<Self::Raw>, OpaqueError>;
}

/// A field holding a raw value and its converted counterpart, always in sync.
pub struct DualValue<C: Conversion> {
    value: Option<(C::Raw, C::Converted)>,
}

impl<C: Conversion> DualValue<C> {
    /// Create an empty [`DualValue`].
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Create a [`DualValue`] from both sides, which must already agree.
    pub(crate) fn from_pair(raw: C::Raw, converted: C::Converted) -> Self {
        Self {
            value: Some((raw, converted)),
        }
    }

    /// Create a [`DualValue`] from its raw value.
    pub fn try_from_raw(raw: C::Raw) -> Result<Self, OpaqueError> {
        Self::new().try_with_raw(raw)
    }

    /// Create a [`DualValue`] from its converted value.
    pub fn try_from_converted(converted: C::Converted) -> Result<Self, OpaqueError> {
        Self::new().try_with_converted(converted)
    }

    generate_set_and_with! {
        /// Set the raw value, deriving the converted one.
        pub fn raw(mut self, raw: Option<C::Raw>) -> Result<Self, OpaqueError> {
            self.value = match raw {
                Some(raw) => C::to_converted(&raw)?.map(|converted| (raw, converted)),
                None => None,
            };
            Ok(self)
        }
    }

    generate_set_and_with! {
        /// Set the converted value, deriving the raw one.
        pub fn converted(mut self, converted: Option<C::Converted>) -> Result<Self, OpaqueError> {
            self.value = match converted {
                Some(converted) => C::to_raw(&converted)?.map(|raw| (raw, converted)),
                None => None,
            };
            Ok(self)
        }
    }

    /// The raw value, if any.
    pub fn raw(&self) -> Option<&C::Raw> {
        self.value.as_ref().map(|(raw, _)| raw)
    }

    /// The converted value, if any.
    pub fn converted(&self) -> Option<&C::Converted> {
        self.value.as_ref().map(|(_, converted)| converted)
    }

    /// Consume this [`DualValue`], returning the converted value.
    pub fn into_converted(self) -> Option<C::Converted> {
        self.value.map(|(_, converted)| converted)
    }

    /// Returns true if no value is set.
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Returns true if a value is set.
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Remove the value from both sides.
    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl<C: Conversion> Default for DualValue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for DualValue<C>
where
    C: Conversion<Raw: Clone, Converted: Clone>,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<C> fmt::Debug for DualValue<C>
where
    C: Conversion<Raw: fmt::Debug>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DualValue").field(&self.raw()).finish()
    }
}

// the converted side is derived, comparing the raw side is sufficient
impl<C> PartialEq for DualValue<C>
where
    C: Conversion<Raw: PartialEq>,
{
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl<C> Eq for DualValue<C> where C: Conversion<Raw: Eq> {}

impl<C> Serialize for DualValue<C>
where
    C: Conversion<Raw: Serialize>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw().serialize(serializer)
    }
}

impl<'de, C> Deserialize<'de> for DualValue<C>
where
    C: Conversion<Raw: Deserialize<'de>>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<C::Raw>::deserialize(deserializer)?;
        Self::new()
            .try_maybe_with_raw(raw)
            .map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// [`Conversion`] between a Base64URL string and the bytes it encodes.
///
/// Empty strings and empty buffers map to `None`.
pub struct Base64Url;

impl Conversion for Base64Url {
    type Raw = String;
    type Converted = Vec<u8>;

    fn to_converted(raw: &String) -> Result<Option<Vec<u8>>, OpaqueError> {
        b64::decode_optional(Some(raw.as_str()))
    }

    fn to_raw(converted: &Vec<u8>) -> Result<Option<String>, OpaqueError> {
        Ok(b64::encode_optional(Some(converted.as_slice())))
    }
}

impl DualValue<Base64Url> {
    /// Create a [`DualValue`] from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        Self {
            value: b64::encode_optional(Some(bytes.as_slice())).map(|encoded| (encoded, bytes)),
        }
    }

    /// The decoded bytes, if any.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.converted().map(Vec::as_slice)
    }

    /// The Base64URL encoded value, if any.
    pub fn encoded(&self) -> Option<&str> {
        self.raw().map(String::as_str)
    }
}
