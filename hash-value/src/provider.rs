/// Capability to compute an `N`-byte digest of a byte sequence.
///
/// This is the collaborator boundary: the value type never validates the
/// output length at runtime, the provider returns exactly `N` bytes by its
/// signature.
pub trait DigestProvider<const N: usize> {
    /// Digest `data` into `N` bytes.
    fn compute(&self, data: &[u8]) -> [u8; N];
}

/// A bare function is a valid descriptor.
impl<const N: usize> DigestProvider<N> for fn(&[u8]) -> [u8; N] {
    fn compute(&self, data: &[u8]) -> [u8; N] {
        self(data)
    }
}

#[cfg(test)]
mod tests {
    use crate::HashValue;

    fn first_four(data: &[u8]) -> [u8; 4] {
        let mut out = [0u8; 4];
        for (i, b) in data.iter().take(4).enumerate() {
            out[i] = *b;
        }
        out
    }

    #[test]
    fn function_values_are_providers() {
        let provider: fn(&[u8]) -> [u8; 4] = first_four;
        let value = HashValue::digest(&provider, b"abcdef");
        assert_eq!(value.to_hex(), "61626364");
    }
}
