use crate::core::{Display, Message, Prompter, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// 依序回放固定答案，用完之後每個提示都視為取消
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Option<String>>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Option<String>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn from_answers<S: AsRef<str>>(answers: &[S]) -> Self {
        Self::new(
            answers
                .iter()
                .map(|a| Some(a.as_ref().to_string()))
                .collect(),
        )
    }

    /// 目前為止顯示過的提示
    pub async fn asked(&self) -> Vec<String> {
        self.asked.lock().await.clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn prompt(&self, message: &str) -> Result<Option<String>> {
        self.asked.lock().await.push(message.to_string());
        let answer = self.answers.lock().await.pop_front().flatten();
        tracing::debug!("scripted answer for {:?}: {:?}", message, answer);
        Ok(answer)
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    messages: Mutex<Vec<Message>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl Display for RecordingDisplay {
    async fn show(&self, message: &Message) -> Result<()> {
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}
