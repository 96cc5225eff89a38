pub mod render;
pub mod template;

pub use render::{render, write_statement};
pub use template::select_template;
