//! Security-extension byte blobs.
//!
//! The non-standard security extension appends an opaque byte sequence to
//! selected messages: an EC signature on Follow_Up, a certificate on
//! Announce. A public-key blob is defined by the same extension for callers
//! that exchange keys out of band. Blobs carry no length prefix — on the
//! wire a blob is simply the remainder of the message, gated by the
//! header's SECURITY flag. Signing and verification happen elsewhere; the
//! codec only moves the bytes.

use bytes::Bytes;

/// EC signature blob carried by Follow_Up messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Bytes);

impl Signature {
    /// Wrap raw signature bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Blob length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Signature {
    fn from(data: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(data))
    }
}

/// EC public key blob.
///
/// Not attached to any message variant by this codec; defined here because
/// the extension treats keys, signatures and certificates uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(Bytes);

impl PublicKey {
    /// Wrap raw key bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Blob length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for PublicKey {
    fn from(data: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(data))
    }
}

/// Certificate blob carried by Announce messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate(Bytes);

impl Certificate {
    /// Wrap raw certificate bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Blob length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Certificate {
    fn from(data: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(data))
    }
}
