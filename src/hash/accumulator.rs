use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Feeds the same bytes into a SHA-1 and a SHA-256 hasher.
#[derive(Clone, Default)]
pub struct DualHasher {
    sha1: Sha1,
    sha256: Sha256,
}

/// Lowercase hex digests produced by [`DualHasher::finalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexDigests {
    pub sha1: String,
    pub sha256: String,
}

impl DualHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.sha1.update(chunk);
        self.sha256.update(chunk);
    }

    pub fn finalize(self) -> HexDigests {
        HexDigests {
            sha1: format!("{:x}", self.sha1.finalize()),
            sha256: format!("{:x}", self.sha256.finalize()),
        }
    }
}
