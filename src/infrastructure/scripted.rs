//! 脚本化提示后端
//!
//! 按顺序消费预先给定的答案，并记录所有请求，用于测试和非交互式重放。

use async_trait::async_trait;
use std::collections::VecDeque;

use crate::error::{AppResult, PromptError};
use crate::infrastructure::prompt::{PromptBackend, PromptRequest, PromptResponse};

/// 脚本化提示后端
///
/// 选择题的答案按选项文本匹配，例如 `"5"`。
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    answers: VecDeque<String>,
    requests: Vec<PromptRequest>,
    rejections: Vec<String>,
    announcements: Vec<String>,
}

impl ScriptedBackend {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// 收到的全部请求（按顺序）
    pub fn requests(&self) -> &[PromptRequest] {
        &self.requests
    }

    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// 尚未消费的答案数量
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[async_trait]
impl PromptBackend for ScriptedBackend {
    async fn prompt(&mut self, request: &PromptRequest) -> AppResult<PromptResponse> {
        self.requests.push(request.clone());

        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| PromptError::ScriptExhausted {
                message: request.message().to_string(),
            })?;

        match request {
            PromptRequest::Text { .. } | PromptRequest::Integer { .. } => {
                Ok(PromptResponse::Text(answer))
            }
            PromptRequest::Choice { message, options } => options
                .iter()
                .position(|option| *option == answer)
                .map(PromptResponse::Choice)
                .ok_or_else(|| {
                    PromptError::UnexpectedAnswer {
                        message: message.clone(),
                        expected: "one of the listed options",
                    }
                    .into()
                }),
        }
    }

    fn reject(&mut self, reason: &str) {
        self.rejections.push(reason.to_string());
    }

    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }
}
