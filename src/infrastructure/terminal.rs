//! 终端提示后端
//!
//! 使用 dialoguer 在终端中提问。dialoguer 是阻塞式的，所以每次提问都放在
//! `spawn_blocking` 中执行，整个会话仍然是严格串行的。

use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::{AppError, AppResult, PromptError};
use crate::infrastructure::prompt::{PromptBackend, PromptRequest, PromptResponse};

/// 终端提示后端
#[derive(Debug, Default)]
pub struct TerminalBackend;

impl TerminalBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptBackend for TerminalBackend {
    async fn prompt(&mut self, request: &PromptRequest) -> AppResult<PromptResponse> {
        let request = request.clone();
        tokio::task::spawn_blocking(move || interact(request))
            .await
            .map_err(|e| AppError::Prompt(PromptError::TaskAborted(e.to_string())))?
    }

    fn reject(&mut self, reason: &str) {
        eprintln!(">> {}", reason);
    }

    fn announce(&mut self, message: &str) {
        println!("{}", message);
    }
}

fn interact(request: PromptRequest) -> AppResult<PromptResponse> {
    let theme = ColorfulTheme::default();
    match request {
        PromptRequest::Text { message } | PromptRequest::Integer { message } => {
            let input = Input::<String>::with_theme(&theme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .map_err(AppError::terminal)?;
            Ok(PromptResponse::Text(input))
        }
        PromptRequest::Choice { message, options } => {
            let index = Select::with_theme(&theme)
                .with_prompt(message)
                .items(&options)
                .default(0)
                .interact()
                .map_err(AppError::terminal)?;
            Ok(PromptResponse::Choice(index))
        }
    }
}
