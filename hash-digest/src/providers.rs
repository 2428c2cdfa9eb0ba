//! Digest providers over the RustCrypto implementations.

use digest::Digest;
use hash_value::DigestProvider;

// The provider contract promises exactly `N` output bytes; the RustCrypto
// output sizes are fixed per algorithm, so the copy below cannot be short.
fn to_array<const N: usize>(output: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(output);
    out
}

/// MD5, 16-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5;

impl DigestProvider<16> for Md5 {
    fn compute(&self, data: &[u8]) -> [u8; 16] {
        to_array(&md5::Md5::digest(data))
    }
}

/// SHA-1, 20-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1;

impl DigestProvider<20> for Sha1 {
    fn compute(&self, data: &[u8]) -> [u8; 20] {
        to_array(&sha1::Sha1::digest(data))
    }
}

/// RIPEMD-160, 20-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ripemd160;

impl DigestProvider<20> for Ripemd160 {
    fn compute(&self, data: &[u8]) -> [u8; 20] {
        to_array(&ripemd160::Ripemd160::digest(data))
    }
}

/// SHA-256, 32-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl DigestProvider<32> for Sha256 {
    fn compute(&self, data: &[u8]) -> [u8; 32] {
        to_array(&sha2::Sha256::digest(data))
    }
}

/// SHA-384, 48-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha384;

impl DigestProvider<48> for Sha384 {
    fn compute(&self, data: &[u8]) -> [u8; 48] {
        to_array(&sha2::Sha384::digest(data))
    }
}

/// SHA-512, 64-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512;

impl DigestProvider<64> for Sha512 {
    fn compute(&self, data: &[u8]) -> [u8; 64] {
        to_array(&sha2::Sha512::digest(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hash_value::{HashValue, HashValueError};

    #[test]
    fn md5_of_hello_world_matches_both_parses() {
        let value = HashValue::digest(&Md5, b"Hello World!");
        assert_eq!(
            value,
            "ed076287532e86365e841e92bfc50d8c".parse::<HashValue<16>>().unwrap()
        );
        assert_eq!(
            value,
            "ed07-6287-532e-8636-5e84-1e92-bfc5-0d8c".parse::<HashValue<16>>().unwrap()
        );
        assert_eq!(
            value.format("X"),
            Err(HashValueError::InvalidFormatSpecifier("X".to_owned()))
        );
    }

    #[test]
    fn md5_of_empty_input() {
        let value = HashValue::digest(&Md5, b"");
        assert_eq!(value.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn sha1_known_vector() {
        let value = HashValue::digest(&Sha1, b"abc");
        assert_eq!(value.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn ripemd160_known_vector() {
        let value = HashValue::digest(&Ripemd160, b"abc");
        assert_eq!(value.to_hex(), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }

    #[test]
    fn sha256_known_vector() {
        let value = HashValue::digest(&Sha256, b"abc");
        assert_eq!(
            value.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha384_known_vector() {
        let value = HashValue::digest(&Sha384, b"abc");
        assert_eq!(
            value.to_hex(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn sha512_known_vector() {
        let value = HashValue::digest(&Sha512, b"abc");
        assert_eq!(
            value.to_hex(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn grouped_form_reparses_for_every_size() {
        fn check<const N: usize>(value: HashValue<N>) {
            assert_eq!(value.to_grouped_hex().parse::<HashValue<N>>(), Ok(value));
        }
        check(HashValue::digest(&Md5, b"x"));
        check(HashValue::digest(&Sha1, b"x"));
        check(HashValue::digest(&Ripemd160, b"x"));
        check(HashValue::digest(&Sha256, b"x"));
        check(HashValue::digest(&Sha384, b"x"));
        check(HashValue::digest(&Sha512, b"x"));
    }
}
