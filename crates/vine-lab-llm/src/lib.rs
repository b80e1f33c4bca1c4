//! LLM-backed extraction for grape soil and petiole lab reports.
//!
//! A report file is attached to a schema-constrained generation request on
//! an OpenAI-compatible API; the returned name/value pairs are normalized by
//! `vine-lab-core` into canonical parameters.

pub mod backend;
pub mod config;
pub mod extraction;
pub mod mock;
pub mod openai;
pub mod parser;
pub mod prompts;

pub use backend::*;
pub use config::LlmConfig;
pub use extraction::*;
pub use mock::MockBackend;
pub use openai::OpenAiBackend;
pub use parser::ReportParser;
pub use prompts::*;
