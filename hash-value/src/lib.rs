//! Fixed-size hash values: parsing, canonical formatting, equality and
//! ordering over the output of a cryptographic digest function, independent
//! of which algorithm produced it.
//!
//! The digest computation itself is a collaborator: anything implementing
//! [`DigestProvider`] can feed a [`HashValue`].

pub mod error;
pub mod format;
pub mod hash_value;
pub mod provider;

pub use error::HashValueError;
pub use hash_value::HashValue;
pub use provider::DigestProvider;
