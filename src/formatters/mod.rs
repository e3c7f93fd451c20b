//! Report formatters for CLI and API output

pub mod json;
pub mod markdown;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
