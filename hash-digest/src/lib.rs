//! Concrete digest providers for [`hash_value::HashValue`], built on the
//! RustCrypto `digest` family, plus blocking file/reader conveniences.
//!
//! Each provider is a zero-sized type whose `DigestProvider` impl pins the
//! output size, so the size of the resulting [`HashValue`] is checked at
//! compile time.

pub mod io;
pub mod providers;

pub use io::{digest_file, digest_reader};
pub use providers::{Md5, Ripemd160, Sha1, Sha256, Sha384, Sha512};

use hash_value::HashValue;

/// 16-byte MD5 hash value.
pub type Md5Hash = HashValue<16>;
/// 20-byte SHA-1 hash value.
pub type Sha1Hash = HashValue<20>;
/// 20-byte RIPEMD-160 hash value.
pub type Ripemd160Hash = HashValue<20>;
/// 32-byte SHA-256 hash value.
pub type Sha256Hash = HashValue<32>;
/// 48-byte SHA-384 hash value.
pub type Sha384Hash = HashValue<48>;
/// 64-byte SHA-512 hash value.
pub type Sha512Hash = HashValue<64>;
