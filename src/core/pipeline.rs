use crate::core::parse::parse_field;
use crate::core::{
    ComputationResult, Display, DisplaySettings, Exercise, FieldFailure, FieldValues, Message,
    Prompter, Result,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Prompting,
    Validating,
    Computing,
    Displaying,
    Done,
    Error,
    Aborted,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PipelineState::Done | PipelineState::Error | PipelineState::Aborted
        )
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Prompting => "prompting",
            PipelineState::Validating => "validating",
            PipelineState::Computing => "computing",
            PipelineState::Displaying => "displaying",
            PipelineState::Done => "done",
            PipelineState::Error => "error",
            PipelineState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(ComputationResult),
    Rejected(FieldFailure),
    Aborted,
}

impl RunOutcome {
    pub fn final_state(&self) -> PipelineState {
        match self {
            RunOutcome::Completed(_) => PipelineState::Done,
            RunOutcome::Rejected(_) => PipelineState::Error,
            RunOutcome::Aborted => PipelineState::Aborted,
        }
    }
}

/// 提示 → 驗證 → 計算 → 顯示，每次執行一輪
pub struct PromptPipeline<P: Prompter, D: Display, S: DisplaySettings> {
    prompter: P,
    display: D,
    settings: S,
}

impl<P: Prompter, D: Display, S: DisplaySettings> PromptPipeline<P, D, S> {
    pub fn new(prompter: P, display: D, settings: S) -> Self {
        Self {
            prompter,
            display,
            settings,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// 取回 prompter 與 display，例如在執行後檢查輸出內容
    pub fn into_parts(self) -> (P, D) {
        (self.prompter, self.display)
    }

    pub async fn run(&self, exercise: &dyn Exercise) -> Result<RunOutcome> {
        tracing::debug!("🚀 Starting exercise: {}", exercise.name());

        let values = match self.collect(exercise).await? {
            Ok(values) => values,
            Err(FieldFailure::Cancelled) => {
                transition(PipelineState::Aborted);
                tracing::debug!("Input cancelled, nothing to show");
                return Ok(RunOutcome::Aborted);
            }
            Err(failure) => return self.reject(exercise, failure).await,
        };

        transition(PipelineState::Computing);
        let result = exercise.compute(&values)?;

        // 輸入合法但結果無法顯示（溢位）也算違反業務規則
        if let Some(reason) = exercise.check_result(&result) {
            let failure = FieldFailure::OutOfDomain {
                field: exercise.name().to_string(),
                reason,
            };
            return self.reject(exercise, failure).await;
        }

        transition(PipelineState::Displaying);
        let body = exercise.render(&result, &self.settings)?;
        self.display
            .show(&Message::result(body, result.clone()))
            .await?;

        transition(PipelineState::Done);
        tracing::debug!("✅ Exercise {} completed", exercise.name());
        Ok(RunOutcome::Completed(result))
    }

    async fn reject(&self, exercise: &dyn Exercise, failure: FieldFailure) -> Result<RunOutcome> {
        transition(PipelineState::Error);
        let body = match &failure {
            FieldFailure::NotANumber { .. } => exercise.parse_error_message(),
            _ => exercise.domain_error_message(),
        };
        tracing::debug!("❌ Rejected input: {:?}", failure);
        self.display.show(&Message::input_error(body)).await?;
        Ok(RunOutcome::Rejected(failure))
    }

    /// 依序收集每個欄位，遇到第一個失敗就停止
    async fn collect(
        &self,
        exercise: &dyn Exercise,
    ) -> Result<std::result::Result<FieldValues, FieldFailure>> {
        let mut values = FieldValues::new();

        for field in exercise.fields() {
            transition(PipelineState::Prompting);
            let Some(raw) = self.prompter.prompt(field.prompt).await? else {
                return Ok(Err(FieldFailure::Cancelled));
            };

            transition(PipelineState::Validating);
            let value = match parse_field(field, &raw) {
                Ok(value) => value,
                Err(failure) => return Ok(Err(failure)),
            };

            if let Some(reason) = exercise.check_domain(field, value) {
                return Ok(Err(FieldFailure::OutOfDomain {
                    field: field.name.to_string(),
                    reason,
                }));
            }

            tracing::debug!("Field {} = {}", field.name, value);
            values.insert(field.name, value);
        }

        Ok(Ok(values))
    }
}

fn transition(state: PipelineState) {
    tracing::debug!("→ {}", state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scripted::{RecordingDisplay, ScriptedPrompter};
    use crate::app::exercises::Addition;
    use crate::config::toml_config::AppConfig;

    fn pipeline(answers: &[&str]) -> PromptPipeline<ScriptedPrompter, RecordingDisplay, AppConfig> {
        PromptPipeline::new(
            ScriptedPrompter::from_answers(answers),
            RecordingDisplay::new(),
            AppConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_completed_run_shows_one_result() {
        let pipeline = pipeline(&["2", "3"]);
        let outcome = pipeline.run(&Addition).await.unwrap();

        assert_eq!(outcome.final_state(), PipelineState::Done);
        let shown = pipeline.display().messages().await;
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].body, "2 + 3 = 5");
        assert!(!shown[0].is_error());
    }

    #[tokio::test]
    async fn test_parse_failure_stops_prompting() {
        let pipeline = pipeline(&["abc", "3"]);
        let outcome = pipeline.run(&Addition).await.unwrap();

        assert_eq!(outcome.final_state(), PipelineState::Error);
        assert_eq!(pipeline.prompter().asked().await, vec!["Enter the first number:"]);
        let shown = pipeline.display().messages().await;
        assert_eq!(shown.len(), 1);
        assert!(shown[0].is_error());
    }

    #[tokio::test]
    async fn test_cancel_on_second_prompt_is_silent() {
        let pipeline = pipeline(&["4"]);
        let outcome = pipeline.run(&Addition).await.unwrap();

        assert_eq!(outcome, RunOutcome::Aborted);
        assert!(pipeline.display().messages().await.is_empty());
        assert_eq!(pipeline.prompter().asked().await.len(), 2);
    }

    #[test]
    fn test_terminal_states() {
        assert!(PipelineState::Done.is_terminal());
        assert!(PipelineState::Aborted.is_terminal());
        assert!(!PipelineState::Computing.is_terminal());
        assert_eq!(PipelineState::Validating.to_string(), "validating");
    }
}
