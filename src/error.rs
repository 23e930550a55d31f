use std::path::{Path, PathBuf};
use thiserror::Error;

/// 应用程序错误类型
///
/// 输入校验失败（`ValidationError`）不在此列：它们在提示层就地重试，永远不会向上传播。
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// 交互提示错误（终端不可用、脚本答案耗尽等）
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),
    /// 小题字母编号错误
    #[error("naming error: {0}")]
    Naming(#[from] NamingError),
    /// 配置错误
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败（例如 info.json 损坏或缺少字段）
    #[error("failed to parse {}: {source}", .path.display())]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// JSON 序列化失败
    #[error("failed to serialize record for {}: {source}", .path.display())]
    JsonSerializeFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 交互提示错误
#[derive(Debug, Error)]
pub enum PromptError {
    /// 终端交互失败
    #[error("terminal interaction failed: {0}")]
    Terminal(String),
    /// 阻塞任务被取消或 panic
    #[error("prompt task aborted: {0}")]
    TaskAborted(String),
    /// 脚本化输入没有剩余答案
    #[error("no scripted answer left for prompt '{message}'")]
    ScriptExhausted { message: String },
    /// 后端返回了与请求类型不匹配的答案
    #[error("unexpected answer for prompt '{message}': expected {expected}")]
    UnexpectedAnswer {
        message: String,
        expected: &'static str,
    },
    /// 选择题答案越界
    #[error("choice {index} out of range for prompt '{message}' ({options} options)")]
    ChoiceOutOfRange {
        message: String,
        index: usize,
        options: usize,
    },
}

/// 小题字母编号错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    /// 编号必须从 1 开始
    #[error("subproblem index must be >= 1, got {0}")]
    NonPositiveIndex(usize),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("failed to parse config file {}: {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("environment variable {var_name} has invalid value '{value}', expected {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
}

/// 用户输入校验失败，由提示层捕获并重新提问
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 需要正整数
    #[error("A value > 0 required.")]
    NotPositive,
    /// 非满分、非零分时必须填写说明
    #[error("A comment is required if score is not 0 or 10.")]
    MissingComment,
    /// 必填字段为空
    #[error("A value is required.")]
    EmptyField,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// 创建目录创建错误
    pub fn create_dir_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// 创建 JSON 解析错误
    pub fn json_parse_failed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        AppError::File(FileError::JsonParseFailed {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// 创建 JSON 序列化错误
    pub fn json_serialize_failed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        AppError::File(FileError::JsonSerializeFailed {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// 创建终端交互错误
    pub fn terminal(source: impl std::fmt::Display) -> Self {
        AppError::Prompt(PromptError::Terminal(source.to_string()))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
