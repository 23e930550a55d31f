//! 自评记录
//!
//! 每次会话维护两份结构相同的记录：
//! - `graded`：实际自评分数和说明
//! - `redo`：所有小题都记为满分，不含说明，用于标记需要重做的部分

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::NamingError;
use crate::models::identity::Identity;
use crate::models::score::Score;
use crate::utils::encode_letters;

/// 小题键：`q{大题}{字母}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubproblemKey {
    score_key: String,
}

impl SubproblemKey {
    /// # 参数
    /// - `outer`: 大题编号（从 1 开始）
    /// - `inner`: 小题序号（从 1 开始）
    pub fn new(outer: usize, inner: usize) -> Result<Self, NamingError> {
        let letter = encode_letters(inner)?;
        Ok(Self {
            score_key: format!("q{}{}", outer, letter),
        })
    }

    pub fn score_key(&self) -> &str {
        &self.score_key
    }

    pub fn comment_key(&self) -> String {
        format!("{}-comment", self.score_key)
    }
}

impl fmt::Display for SubproblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.score_key)
    }
}

/// 按插入顺序保存的键值记录，序列化为扁平 JSON 对象
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// 以身份信息作为初始内容
    pub fn seeded(identity: &Identity) -> Self {
        let mut record = Self::default();
        for (key, value) in identity.fields() {
            record.insert(key, value);
        }
        record
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Value::String(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// 小题分数键的数量（`q` 开头且不是说明）
    pub fn score_key_count(&self) -> usize {
        self.keys()
            .filter(|key| is_subproblem_key(key) && !key.ends_with("-comment"))
            .count()
    }

    pub fn comment_key_count(&self) -> usize {
        self.keys()
            .filter(|key| is_subproblem_key(key) && key.ends_with("-comment"))
            .count()
    }

    /// 紧凑 JSON 文本
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn is_subproblem_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next() == Some('q') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// 一次会话的两份记录，由编排层独占
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecords {
    pub graded: Record,
    pub redo: Record,
}

impl GradeRecords {
    pub fn seeded(identity: &Identity) -> Self {
        Self {
            graded: Record::seeded(identity),
            redo: Record::seeded(identity),
        }
    }

    /// 写入分数：`graded` 记实际分数，`redo` 一律记满分
    pub fn record_score(&mut self, key: &SubproblemKey, score: Score) {
        self.graded.insert(key.score_key(), score.to_string());
        self.redo.insert(key.score_key(), Score::MAX.to_string());
    }

    /// 说明只写入 `graded`
    pub fn record_comment(&mut self, key: &SubproblemKey, comment: impl Into<String>) {
        self.graded.insert(key.comment_key(), comment);
    }
}
