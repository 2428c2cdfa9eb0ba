//! Blocking file and reader digests.
//!
//! Pass-through conveniences: the full contents are read into memory and
//! handed to the provider. I/O errors propagate untouched.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use hash_value::{DigestProvider, HashValue};

/// Digest everything `reader` yields until EOF.
pub fn digest_reader<const N: usize, P, R>(provider: &P, mut reader: R) -> io::Result<HashValue<N>>
where
    P: DigestProvider<N>,
    R: Read,
{
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(HashValue::digest(provider, &data))
}

/// Digest the contents of the file at `path`.
pub fn digest_file<const N: usize, P>(
    provider: &P,
    path: impl AsRef<Path>,
) -> io::Result<HashValue<N>>
where
    P: DigestProvider<N>,
{
    let path = path.as_ref();
    log::trace!("digesting file {}", path.display());
    digest_reader(provider, File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{Md5, Sha256};
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn reader_digest_matches_in_memory_digest() {
        let data = b"some streamed content".to_vec();
        let from_reader = digest_reader(&Sha256, Cursor::new(&data)).unwrap();
        assert_eq!(from_reader, HashValue::digest(&Sha256, &data));
    }

    #[test]
    fn file_digest_matches_in_memory_digest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Hello World!").unwrap();
        let value = digest_file(&Md5, file.path()).unwrap();
        assert_eq!(value.to_hex(), "ed076287532e86365e841e92bfc50d8c");
    }

    #[test]
    fn missing_file_propagates_the_io_error() {
        let err = digest_file::<16, _>(&Md5, "/no/such/file").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
