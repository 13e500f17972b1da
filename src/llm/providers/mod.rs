//! LLM provider implementations
//!
//! Concrete implementations of the LlmProvider trait. The simulation only
//! ships the OpenAI backend the original deployment targets.

pub mod openai;

pub use openai::*;
