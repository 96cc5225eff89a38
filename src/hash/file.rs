use super::accumulator::{DualHasher, HexDigests};
use crate::refusal::PrefetchError;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

/// Read size for the hashing loop.
pub const CHUNK_SIZE: usize = 4096;

/// Stand-in download location; users edit it into the real URL.
pub const PLACEHOLDER_URL: &str = "http://REPLACEME";

/// Identity of a file as it appears in a prefetch statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub name: String,
    pub url: &'static str,
    pub size: u64,
    pub sha1: String,
    pub sha256: String,
}

/// Streams `reader` through both hashers and returns the digests together
/// with the number of bytes consumed.
pub fn digest_reader<R: Read>(reader: R) -> io::Result<(HexDigests, u64)> {
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, reader);
    let mut hasher = DualHasher::new();
    let mut streamed = 0_u64;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };
        if buf.is_empty() {
            break;
        }
        hasher.update(buf);
        let len = buf.len();
        trace!(len, "hashed chunk");
        streamed += len as u64;
        reader.consume(len);
    }

    Ok((hasher.finalize(), streamed))
}

/// Hashes the file at `path` in a single pass.
///
/// The handle is closed before the size is taken from filesystem metadata,
/// so `size` reflects what the filesystem reports rather than the number of
/// bytes streamed.
pub fn hash_file(path: &Path) -> Result<FileDigest, PrefetchError> {
    debug!(path = %path.display(), "hashing file");

    let (digests, streamed) = {
        let file = File::open(path).map_err(|error| PrefetchError::io(path, error))?;
        digest_reader(file).map_err(|error| PrefetchError::io(path, error))?
    };

    let size = fs::metadata(path)
        .map_err(|error| PrefetchError::io(path, error))?
        .len();
    debug!(size, streamed, sha1 = %digests.sha1, sha256 = %digests.sha256, "file hashed");

    Ok(FileDigest {
        name: file_name(path),
        url: PLACEHOLDER_URL,
        size,
        sha1: digests.sha1,
        sha256: digests.sha256,
    })
}

/// Final path segment, or an empty string when the path has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
