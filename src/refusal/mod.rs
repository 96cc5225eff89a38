pub mod codes;
pub mod error;

pub use codes::RefusalCode;
pub use error::PrefetchError;
