pub mod prompt;
pub mod scripted;
pub mod terminal;

pub use prompt::{PromptBackend, PromptRequest, PromptResponse, Prompter};
pub use scripted::ScriptedBackend;
pub use terminal::TerminalBackend;
