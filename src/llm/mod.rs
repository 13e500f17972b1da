//! LLM provider abstraction layer
//!
//! This module provides a provider-agnostic interface for the single external
//! generation-call dependency of the simulation pipeline.

pub mod provider;
pub mod providers;

pub use provider::*;
pub use providers::*;
