//! The crisis simulation core
//!
//! A fixed roster of role-playing participants, their report task templates,
//! a uniform task executor over the LLM provider, and the three-phase
//! sequential pipeline that threads each phase's text into the next.

pub mod executor;
pub mod outcome;
pub mod participants;
pub mod pipeline;
pub mod tasks;

pub use executor::{ExecutionResult, TaskExecutor, NO_DATA_SENTINEL};
pub use outcome::{SimulationOutcome, StakeholderReport};
pub use participants::{registry, Participant};
pub use pipeline::{RunPhase, RunState, SimulationPipeline};
pub use tasks::{CrisisInput, ReportTask};
