//! # Self Grade
//!
//! 一个交互式作业自评命令行工具：逐题记录分数和说明，
//! 最后写出"自评"和"重做"两份记录。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 交互提示，只暴露"提问"能力
//! - `Prompter` - 校验输入并在失败时重问
//! - `TerminalBackend` / `ScriptedBackend` - 终端和脚本两种后端
//!
//! ### ② 业务能力层（Services）
//! - `IdentityStore` - 读写 info.json
//! - `RecordWriter` - 创建输出目录，写出两份记录
//!
//! ### ③ 流程层（Workflow）
//! - `SubproblemCtx` - 上下文封装（大题编号 + 小题序号）
//! - `SubproblemFlow` - 单个小题流程（分数 → 记录 → 说明）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/session` - 会话生命周期
//! - `orchestrator/problem_processor` - 遍历大题和小题
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{PromptBackend, Prompter, ScriptedBackend, TerminalBackend};
pub use models::{GradeRecords, Identity, Record, Score, SubproblemKey};
pub use orchestrator::{App, SessionReport, SessionStats};
pub use utils::encode_letters;
pub use workflow::{SubproblemCtx, SubproblemFlow};
