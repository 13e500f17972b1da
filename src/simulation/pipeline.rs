//! The three-phase sequential pipeline
//!
//! Phase 1 expands the operator's crisis input into a full analysis, Phase 2
//! runs every stakeholder against that analysis one at a time, Phase 3 feeds
//! the labeled roundup of everything to the summarizer. Phases are strictly
//! ordered; a phase starts only after the previous one collected all of its
//! outputs. The only fatal failure is the missing-credential precondition at
//! construction time — once a run starts it always reaches `Phase3Done`,
//! degrading individual tasks to the sentinel as needed.

use crate::config::SimulatorConfig;
use crate::error::SimulatorResult;
use crate::llm::provider::LlmProvider;
use crate::llm::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::simulation::executor::{ExecutionResult, TaskExecutor, NO_DATA_SENTINEL};
use crate::simulation::outcome::{SimulationOutcome, StakeholderReport};
use crate::simulation::participants;
use crate::simulation::tasks::{self, CrisisInput};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

/// Pipeline progress for one run
///
/// `NotStarted -> Phase1Running -> Phase1Done -> Phase2Running -> Phase2Done
/// -> Phase3Running -> Phase3Done`, no branching, no retries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunPhase {
    #[default]
    NotStarted,
    Phase1Running,
    Phase1Done,
    Phase2Running,
    Phase2Done,
    Phase3Running,
    Phase3Done,
}

impl RunPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Phase3Done)
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunPhase::NotStarted => "not_started",
            RunPhase::Phase1Running => "crisis_analysis_running",
            RunPhase::Phase1Done => "crisis_analysis_done",
            RunPhase::Phase2Running => "stakeholder_reports_running",
            RunPhase::Phase2Done => "stakeholder_reports_done",
            RunPhase::Phase3Running => "summary_running",
            RunPhase::Phase3Done => "summary_done",
        };
        f.write_str(label)
    }
}

/// Transient per-run state: current phase plus every collected result
#[derive(Debug, Default)]
pub struct RunState {
    phase: RunPhase,
    completed: HashMap<Uuid, ExecutionResult>,
}

impl RunState {
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn result_for(&self, task_id: &Uuid) -> Option<&ExecutionResult> {
        self.completed.get(task_id)
    }

    /// Per-task output collection: raw text, or the sentinel when the task
    /// is unknown or produced nothing
    pub fn output_text(&self, task_id: &Uuid) -> &str {
        self.completed
            .get(task_id)
            .map(ExecutionResult::text)
            .unwrap_or(NO_DATA_SENTINEL)
    }

    fn advance(&mut self, next: RunPhase) {
        debug!(from = %self.phase, to = %next, "Pipeline phase transition");
        self.phase = next;
    }

    fn record(&mut self, result: ExecutionResult) {
        self.completed.insert(result.task_id, result);
    }
}

/// Orchestrates one simulation run end to end
pub struct SimulationPipeline {
    executor: TaskExecutor,
    state: RunState,
}

impl SimulationPipeline {
    /// Create a pipeline over an already-constructed provider
    pub fn new(provider: Arc<dyn LlmProvider>, config: &SimulatorConfig) -> Self {
        Self {
            executor: TaskExecutor::new(provider, config),
            state: RunState::default(),
        }
    }

    /// Create a pipeline over the configured OpenAI backend
    ///
    /// This is where the credential precondition is enforced: a missing API
    /// key env var fails here, before any phase can start, and must be
    /// surfaced to the operator rather than retried.
    pub fn from_config(config: &SimulatorConfig) -> SimulatorResult<Self> {
        config.validate()?;
        let api_key = config.get_llm_api_key()?;
        let provider = OpenAiProvider::new(OpenAiConfig {
            api_key,
            ..Default::default()
        })?;
        Ok(Self::new(Arc::new(provider), config))
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Run all three phases and return the renderable artifacts
    ///
    /// Individual task failures degrade to the sentinel; the run itself
    /// always completes.
    pub async fn run(&mut self, input: &CrisisInput) -> SimulationOutcome {
        self.state = RunState::default();

        info!(
            crisis_details = %input.details(),
            duration_months = input.duration_months(),
            "Starting simulation run"
        );

        let crisis_report = self.run_crisis_analysis(input).await;
        let labeled_reports = self.run_stakeholder_reports(&crisis_report).await;
        let summary = self.run_summary(&crisis_report, &labeled_reports).await;

        info!(
            completed_tasks = self.state.completed_count(),
            "Simulation run complete"
        );

        SimulationOutcome {
            crisis_report,
            stakeholder_reports: labeled_reports,
            summary,
        }
    }

    /// Phase 1: one analyst task, no upstream context
    async fn run_crisis_analysis(&mut self, input: &CrisisInput) -> String {
        let span = crate::phase_span!(phase = "crisis_analysis");
        async {
            self.state.advance(RunPhase::Phase1Running);

            let task = tasks::crisis_analysis_task(input);
            let result = self.executor.execute(participants::analyst(), &task).await;
            let report = result.text().to_string();
            self.state.record(result);

            self.state.advance(RunPhase::Phase1Done);
            report
        }
        .instrument(span)
        .await
    }

    /// Phase 2: every stakeholder in registration order, one at a time, each
    /// seeded with the Phase 1 report; all outputs collected before Phase 3
    async fn run_stakeholder_reports(&mut self, crisis_report: &str) -> Vec<StakeholderReport> {
        let span = crate::phase_span!(phase = "stakeholder_reports");
        async {
            self.state.advance(RunPhase::Phase2Running);

            let mut reports = Vec::new();
            for (participant, task) in tasks::stakeholder_tasks(crisis_report) {
                let result = self.executor.execute(participant, &task).await;
                reports.push(StakeholderReport {
                    role_name: participant.role_name.to_string(),
                    body: result.text().to_string(),
                });
                self.state.record(result);
            }

            self.state.advance(RunPhase::Phase2Done);
            reports
        }
        .instrument(span)
        .await
    }

    /// Phase 3: one summarizer task over the labeled roundup, stakeholders in
    /// registration order and the analyst's report last
    async fn run_summary(
        &mut self,
        crisis_report: &str,
        stakeholder_reports: &[StakeholderReport],
    ) -> String {
        let span = crate::phase_span!(phase = "summary");
        async {
            self.state.advance(RunPhase::Phase3Running);

            let mut labeled: Vec<(&str, &str)> = stakeholder_reports
                .iter()
                .map(|r| (r.role_name.as_str(), r.body.as_str()))
                .collect();
            labeled.push((participants::analyst().role_name, crisis_report));

            let task = tasks::summary_task(&labeled);
            let result = self
                .executor
                .execute(participants::summarizer(), &task)
                .await;
            let summary = result.text().to_string();
            self.state.record(result);

            self.state.advance(RunPhase::Phase3Done);
            summary
        }
        .instrument(span)
        .await
    }
}
