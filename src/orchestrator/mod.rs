//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `session` - 会话编排器
//! - 管理会话生命周期（身份信息、输出目录、写出记录）
//! - 独占两份记录，向下传递可变引用
//!
//! ### `problem_processor` - 大题处理器
//! - 遍历大题和小题
//! - 复用 `SubproblemFlow`
//!
//! ## 层次关系
//!
//! ```text
//! session (一次作业)
//!     ↓
//! problem_processor (大题 1..M，小题 1..N)
//!     ↓
//! workflow::SubproblemFlow (单个小题)
//!     ↓
//! services / infrastructure (文件读写 / 交互提示)
//! ```

pub mod problem_processor;
pub mod session;

pub use problem_processor::{process_problems, process_subproblems, SessionStats};
pub use session::{App, SessionReport};
