pub mod parser;
pub mod types;

pub use types::*;
pub use parser::{apply_env, load_settings, parse_config};
