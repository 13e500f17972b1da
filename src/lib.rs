//! chainsim - Supply Chain Crisis Simulation
//!
//! A sequential multi-agent simulation of the Galaxy S24 Ultra supply chain
//! under crisis. Twelve role-playing LLM participants each produce a
//! narrative report across three strict phases: crisis analysis, stakeholder
//! reports, and a consolidated summary. The crate is the simulation core
//! only; rendering belongs to whatever presentation layer embeds it.
//!
//! # Overview
//!
//! This crate provides:
//! - A fixed participant registry (personas, objectives, locations)
//! - Report task templates with deterministic context threading
//! - The three-phase pipeline orchestrator with degrade-gracefully execution
//! - An LLM provider abstraction with an OpenAI backend
//!
//! # Quick Start
//!
//! ```rust
//! use chainsim::simulation::tasks::{self, CrisisInput};
//! use chainsim::simulation::participants;
//!
//! // Validate operator input at the boundary
//! let input = CrisisInput::new("Port strike in Busan", 3).unwrap();
//!
//! // Phase 1's task embeds the crisis details and duration
//! let analysis = tasks::crisis_analysis_task(&input);
//! assert!(analysis.instruction.contains("Port strike in Busan"));
//!
//! // Phase 2 threads the analysis report into every stakeholder task
//! let stakeholder_tasks = tasks::stakeholder_tasks("the analysis report");
//! assert_eq!(stakeholder_tasks.len(), participants::stakeholders().len());
//! for (_, task) in &stakeholder_tasks {
//!     assert!(task.instruction.ends_with("the analysis report"));
//! }
//! ```
//!
//! Running the full pipeline requires a provider; see
//! [`simulation::SimulationPipeline`].

pub mod config;
pub mod error;
pub mod llm;
pub mod observability;
pub mod simulation;
pub mod testing;

pub use config::{SimulatorConfig, MAX_CRISIS_DURATION_MONTHS, MIN_CRISIS_DURATION_MONTHS};
pub use error::{SimulatorError, SimulatorResult};
pub use simulation::{
    CrisisInput, ExecutionResult, Participant, ReportTask, RunPhase, RunState,
    SimulationOutcome, SimulationPipeline, StakeholderReport, TaskExecutor, NO_DATA_SENTINEL,
};
