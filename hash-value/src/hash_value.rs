use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use parity_scale_codec::{Decode, Encode, EncodeLike, Error as CodecError, Input, Output};

use crate::error::HashValueError;
use crate::format;
use crate::provider::DigestProvider;

/// The output of an `N`-byte digest function, held in canonical form.
///
/// Immutable once constructed; equality, ordering and `std::hash::Hash` are
/// defined over the canonical bytes, which coincides with case-insensitive
/// ordinal comparison of the hex representation.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct HashValue<const N: usize> {
    hash: [u8; N],
}

impl<const N: usize> HashValue<N> {
    /// The length of the hash in bytes.
    pub const LENGTH: usize = N;
    /// The length of the hash in bits.
    pub const LENGTH_IN_BITS: usize = N * 8;
    /// The length of the hash in nibbles (hex characters).
    pub const LENGTH_IN_NIBBLES: usize = N * 2;

    /// Create a new [`HashValue`] from a byte array.
    pub fn new(hash: [u8; N]) -> Self {
        HashValue { hash }
    }

    /// Create a [`HashValue`] from a slice of exactly `N` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HashValueError> {
        if bytes.len() != N {
            return Err(HashValueError::InvalidFormat { expected: N });
        }
        let mut hash = [0u8; N];
        hash.copy_from_slice(bytes);
        Ok(HashValue { hash })
    }

    /// Parse a hash from its plain (`"deadbeef…"`) or grouped
    /// (`"dead-beef-…"`) hex representation, either case.
    pub fn from_hex(s: &str) -> Result<Self, HashValueError> {
        format::parse(s).map(Self::new)
    }

    /// Like [`from_hex`](Self::from_hex), treating `None` as its own error.
    pub fn from_opt_hex(s: Option<&str>) -> Result<Self, HashValueError> {
        Self::from_hex(s.ok_or(HashValueError::NullInput)?)
    }

    /// Like [`from_slice`](Self::from_slice), treating `None` as its own
    /// error.
    pub fn from_opt_slice(bytes: Option<&[u8]>) -> Result<Self, HashValueError> {
        Self::from_slice(bytes.ok_or(HashValueError::NullInput)?)
    }

    /// Non-erroring variant of [`from_hex`](Self::from_hex).
    pub fn parse_hex(s: &str) -> Option<Self> {
        Self::from_hex(s).ok()
    }

    /// Non-erroring variant of [`from_slice`](Self::from_slice).
    pub fn parse_slice(bytes: &[u8]) -> Option<Self> {
        Self::from_slice(bytes).ok()
    }

    /// Digest `data` with `provider` and wrap the output.
    ///
    /// Infallible: the provider returns exactly `N` bytes by construction.
    pub fn digest<P: DigestProvider<N>>(provider: &P, data: &[u8]) -> Self {
        Self::new(provider.compute(data))
    }

    /// The canonical value as an owned byte array.
    pub fn to_bytes(&self) -> [u8; N] {
        self.hash
    }

    /// The canonical value as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.hash
    }

    /// Canonical ("H") form: `2N` lowercase hex characters, no separators.
    pub fn to_hex(&self) -> String {
        format::encode(&self.hash)
    }

    /// Grouped ("D") form: hex characters in runs of 4 joined by `-`.
    pub fn to_grouped_hex(&self) -> String {
        format::encode_grouped(&self.hash)
    }

    /// Format with an explicit specifier: `""`/`"H"`/`"h"` for the plain
    /// form, `"D"`/`"d"` for the grouped form. Anything else errors.
    pub fn format(&self, spec: &str) -> Result<String, HashValueError> {
        match spec {
            "" | "H" | "h" => Ok(self.to_hex()),
            "D" | "d" => Ok(self.to_grouped_hex()),
            other => Err(HashValueError::InvalidFormatSpecifier(other.to_owned())),
        }
    }
}

impl<const N: usize> fmt::Display for HashValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> FromStr for HashValue<N> {
    type Err = HashValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> AsRef<[u8; N]> for HashValue<N> {
    fn as_ref(&self) -> &[u8; N] {
        &self.hash
    }
}

impl<const N: usize> From<HashValue<N>> for [u8; N] {
    fn from(hash: HashValue<N>) -> Self {
        hash.hash
    }
}

impl<const N: usize> From<[u8; N]> for HashValue<N> {
    fn from(hash: [u8; N]) -> Self {
        HashValue::new(hash)
    }
}

impl<'a, const N: usize> TryFrom<&'a [u8]> for HashValue<N> {
    type Error = HashValueError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

/// Comparison against raw bytes never errors; a length mismatch is simply
/// not equal.
impl<const N: usize> PartialEq<[u8]> for HashValue<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.hash[..] == *other
    }
}

impl<const N: usize> PartialEq<&[u8]> for HashValue<N> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.hash[..] == **other
    }
}

impl<const N: usize> Encode for HashValue<N>
where
    [u8; N]: Encode,
{
    fn size_hint(&self) -> usize {
        self.hash.size_hint()
    }

    fn encode_to<T: Output>(&self, dest: &mut T) {
        self.hash.encode_to(dest)
    }
}

impl<const N: usize> EncodeLike for HashValue<N> where [u8; N]: Encode {}

impl<const N: usize> Decode for HashValue<N>
where
    [u8; N]: Decode,
{
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        Ok(HashValue::new(<[u8; N]>::decode(input)?))
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for HashValue<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for HashValue<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor<const N: usize>;

        impl<'de, const N: usize> serde::de::Visitor<'de> for HexVisitor<N> {
            type Value = HashValue<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {}-character hex string", N * 2)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                HashValue::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor::<N>)
    }
}
