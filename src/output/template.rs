use crate::cli::{Algorithm, OutputStyle};
use crate::refusal::PrefetchError;
use tracing::debug;

pub const PREFETCH_ALL: &str = "prefetch {name} sha1:{sha1} size:{size} {url} sha256:{sha256}";
pub const PREFETCH_SHA1: &str = "prefetch {name} sha1:{sha1} size:{size} {url}";
pub const PREFETCH_SHA256: &str = "prefetch {name} size:{size} {url} sha256:{sha256}";
pub const DAVIS_BLOCK: &str = "begin prefetch block
add prefetch item name={name} sha1={sha1} size={size} url={url}
collect prefetch items
end prefetch block";
pub const VALUE_SHA1: &str = "{sha1}";
pub const VALUE_SHA256: &str = "{sha256}";

/// Picks the literal template for a style and algorithm pair.
///
/// Davis blocks only carry SHA-1, and a bare value needs exactly one
/// algorithm; those combinations are refused.
pub fn select_template(
    style: OutputStyle,
    algorithm: Algorithm,
) -> Result<&'static str, PrefetchError> {
    let template = match (style, algorithm) {
        (OutputStyle::Prefetch, Algorithm::All) => PREFETCH_ALL,
        (OutputStyle::Prefetch, Algorithm::Sha1) => PREFETCH_SHA1,
        (OutputStyle::Prefetch, Algorithm::Sha256) => PREFETCH_SHA256,
        (OutputStyle::Davis, Algorithm::All | Algorithm::Sha1) => DAVIS_BLOCK,
        (OutputStyle::Davis, unsupported) => {
            return Err(PrefetchError::UnsupportedDavisAlgorithm(unsupported));
        }
        (OutputStyle::Value, Algorithm::Sha1) => VALUE_SHA1,
        (OutputStyle::Value, Algorithm::Sha256) => VALUE_SHA256,
        (OutputStyle::Value, Algorithm::All) => return Err(PrefetchError::MissingValueAlgorithm),
    };
    debug!(%style, %algorithm, "selected template");
    Ok(template)
}
