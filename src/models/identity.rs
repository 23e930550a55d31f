//! 学生身份信息
//!
//! 首次运行时采集，之后每次会话都从 info.json 读取

use serde::{Deserialize, Serialize};

/// 学生身份：姓名、邮箱、学号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub sid: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            sid: sid.into(),
        }
    }

    /// 按写入记录时的顺序返回各字段
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("sid", self.sid.as_str()),
        ]
    }
}
