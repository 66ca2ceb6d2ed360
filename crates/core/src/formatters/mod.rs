pub mod json;
pub mod text;
pub mod toml;

pub use json::{JsonConfig, JsonFormatter, report_to_json};
pub use text::{TextConfig, TextFormatter, report_to_text};
pub use toml::{TomlFormatter, report_to_toml};
