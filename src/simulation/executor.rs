//! Uniform participant invocation
//!
//! Every participant is invoked identically: persona as the system message,
//! instruction plus expected output shape as the user message, one free-text
//! result back. A failed or empty generation never propagates — the result
//! records no output and collection substitutes the sentinel, so the
//! aggregation phase always has a value per task.

use crate::config::SimulatorConfig;
use crate::llm::provider::{CompletionRequest, LlmProvider, Message, MessageRole};
use crate::simulation::participants::Participant;
use crate::simulation::tasks::ReportTask;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

/// Fallback value exposed when a task produced no usable output
pub const NO_DATA_SENTINEL: &str = "No data available.";

/// The raw outcome of one task invocation
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub task_id: Uuid,
    pub participant_id: &'static str,
    /// None when the generation call failed or returned no content
    pub output: Option<String>,
    pub produced_at: DateTime<Utc>,
}

impl ExecutionResult {
    /// The report text, with the sentinel substituted for missing output
    pub fn text(&self) -> &str {
        self.output.as_deref().unwrap_or(NO_DATA_SENTINEL)
    }
}

/// Executes report tasks against the configured LLM provider
pub struct TaskExecutor {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    max_iterations: u32,
}

impl TaskExecutor {
    pub fn new(provider: Arc<dyn LlmProvider>, config: &SimulatorConfig) -> Self {
        Self {
            provider,
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            max_iterations: config.simulation.max_task_iterations,
        }
    }

    /// Invoke one participant on one task
    pub async fn execute(&self, participant: &Participant, task: &ReportTask) -> ExecutionResult {
        let span = crate::participant_span!(
            participant_id = %participant.id,
            task_id = %task.id,
        );
        self.execute_inner(participant, task).instrument(span).await
    }

    async fn execute_inner(
        &self,
        participant: &Participant,
        task: &ReportTask,
    ) -> ExecutionResult {
        debug!(
            participant_id = %participant.id,
            instruction_length = task.instruction.len(),
            "Dispatching report task"
        );

        let mut metadata = HashMap::new();
        metadata.insert("participant_id".to_string(), participant.id.to_string());
        metadata.insert("task_id".to_string(), task.id.to_string());

        let request = CompletionRequest {
            messages: vec![
                Message {
                    role: MessageRole::System,
                    content: Self::system_prompt(participant),
                },
                Message {
                    role: MessageRole::User,
                    content: Self::user_prompt(task),
                },
            ],
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            max_attempts: self.max_iterations,
            metadata,
        };

        let output = match self.provider.complete(request).await {
            Ok(response) => {
                let content = response
                    .content
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);

                match &content {
                    Some(text) => {
                        info!(
                            participant_id = %participant.id,
                            task_id = %task.id,
                            response_length = text.len(),
                            total_tokens = response.usage.total_tokens,
                            "Report task completed"
                        );
                    }
                    None => {
                        warn!(
                            participant_id = %participant.id,
                            task_id = %task.id,
                            "Generation returned no content, substituting sentinel"
                        );
                    }
                }
                content
            }
            Err(e) => {
                warn!(
                    participant_id = %participant.id,
                    task_id = %task.id,
                    error = %e,
                    "Generation call failed, substituting sentinel"
                );
                None
            }
        };

        ExecutionResult {
            task_id: task.id,
            participant_id: task.participant_id,
            output,
            produced_at: Utc::now(),
        }
    }

    /// Render a participant's persona into the system message (pure function)
    fn system_prompt(participant: &Participant) -> String {
        let mut prompt = format!(
            "You are {role}. Your goal: {objective}\n\n{persona}",
            role = participant.role_name,
            objective = participant.objective,
            persona = participant.persona,
        );

        if let Some(location) = participant.location {
            prompt.push_str(&format!("\n\nLocation: {location}"));
        }

        if !participant.allow_delegation {
            prompt.push_str(
                "\n\nWork strictly within your own role. Do not hand this task off to any other participant.",
            );
        }

        prompt
    }

    /// Render a task into the user message (pure function)
    fn user_prompt(task: &ReportTask) -> String {
        format!(
            "{instruction}\n\nThis is the expected shape of your final report:\n{expected}",
            instruction = task.instruction,
            expected = task.expected_output,
        )
    }
}
