//! 交互提示 - 基础设施层
//!
//! 核心只需要三种提问：必填文本、正整数、固定选项。
//! 后端（终端、脚本）只负责"问"和"显示"，校验和重问都在 `Prompter` 中完成，
//! 因此任何满足 `PromptBackend` 的实现都可以互换。

use async_trait::async_trait;
use tracing::debug;

use crate::error::{AppResult, PromptError, ValidationError};
use crate::models::Score;

/// 提问请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    /// 自由文本
    Text { message: String },
    /// 整数（后端按原始文本返回，由 `Prompter` 解析）
    Integer { message: String },
    /// 从固定选项中单选
    Choice {
        message: String,
        options: Vec<String>,
    },
}

impl PromptRequest {
    pub fn message(&self) -> &str {
        match self {
            PromptRequest::Text { message }
            | PromptRequest::Integer { message }
            | PromptRequest::Choice { message, .. } => message,
        }
    }
}

/// 后端返回的原始答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// 文本或整数请求的原始输入
    Text(String),
    /// 选项下标
    Choice(usize),
}

/// 提示后端
///
/// 职责：
/// - 显示问题并阻塞等待回答
/// - 显示校验失败信息
/// - 不做任何校验
#[async_trait]
pub trait PromptBackend: Send {
    async fn prompt(&mut self, request: &PromptRequest) -> AppResult<PromptResponse>;

    /// 校验失败时在原问题下方显示的提示
    fn reject(&mut self, reason: &str);

    /// 非提问类的输出，例如 "Question 2"
    fn announce(&mut self, message: &str);
}

/// 带校验的提问入口
pub struct Prompter<B> {
    backend: B,
}

impl<B: PromptBackend> Prompter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn announce(&mut self, message: &str) {
        self.backend.announce(message);
    }

    /// 必填文本（身份信息）
    pub async fn ask_required_text(&mut self, message: &str) -> AppResult<String> {
        self.ask_text_until(message, ValidationError::EmptyField).await
    }

    /// 部分得分时的说明
    pub async fn ask_comment(&mut self, message: &str) -> AppResult<String> {
        self.ask_text_until(message, ValidationError::MissingComment).await
    }

    async fn ask_text_until(
        &mut self,
        message: &str,
        on_empty: ValidationError,
    ) -> AppResult<String> {
        let request = PromptRequest::Text {
            message: message.to_string(),
        };
        loop {
            let input = self.ask_raw_text(&request).await?;
            match validate_text(&input, on_empty) {
                Ok(()) => return Ok(input),
                Err(reason) => self.reject(&request, reason),
            }
        }
    }

    /// 正整数，非数字、0 和负数都会重问
    pub async fn ask_positive_int(&mut self, message: &str) -> AppResult<usize> {
        let request = PromptRequest::Integer {
            message: message.to_string(),
        };
        loop {
            let input = self.ask_raw_text(&request).await?;
            match validate_positive_int(&input) {
                Ok(value) => return Ok(value),
                Err(reason) => self.reject(&request, reason),
            }
        }
    }

    /// 从固定分数档位中选择
    pub async fn ask_score(&mut self, message: &str) -> AppResult<Score> {
        let options: Vec<String> = Score::ALL.iter().map(Score::to_string).collect();
        let option_count = options.len();
        let request = PromptRequest::Choice {
            message: message.to_string(),
            options,
        };

        match self.backend.prompt(&request).await? {
            PromptResponse::Choice(index) => Score::ALL.get(index).copied().ok_or_else(|| {
                PromptError::ChoiceOutOfRange {
                    message: message.to_string(),
                    index,
                    options: option_count,
                }
                .into()
            }),
            PromptResponse::Text(_) => Err(PromptError::UnexpectedAnswer {
                message: message.to_string(),
                expected: "choice",
            }
            .into()),
        }
    }

    async fn ask_raw_text(&mut self, request: &PromptRequest) -> AppResult<String> {
        match self.backend.prompt(request).await? {
            PromptResponse::Text(input) => Ok(input),
            PromptResponse::Choice(_) => Err(PromptError::UnexpectedAnswer {
                message: request.message().to_string(),
                expected: "text",
            }
            .into()),
        }
    }

    fn reject(&mut self, request: &PromptRequest, reason: ValidationError) {
        debug!("Rejected answer for '{}': {}", request.message(), reason);
        self.backend.reject(&reason.to_string());
    }
}

/// 文本校验：去掉首尾空白后不能为空
pub fn validate_text(input: &str, on_empty: ValidationError) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        Err(on_empty)
    } else {
        Ok(())
    }
}

/// 正整数校验
pub fn validate_positive_int(input: &str) -> Result<usize, ValidationError> {
    match input.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::NotPositive),
    }
}
