pub mod accumulator;
pub mod file;

pub use accumulator::{DualHasher, HexDigests};
pub use file::{CHUNK_SIZE, FileDigest, PLACEHOLDER_URL, digest_reader, file_name, hash_file};
