pub mod parser;
pub mod types;

pub use parser::load_config;
pub use types::GuardConfig;
