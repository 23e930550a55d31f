//! 小题处理上下文
//!
//! 封装"正在自评第几大题的第几小题"这一信息，只在会话中使用，不会持久化

use std::fmt::Display;

/// 小题处理上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubproblemCtx {
    /// 大题编号（从1开始）
    pub outer_index: usize,

    /// 大题总数
    pub outer_count: usize,

    /// 小题序号（从1开始）
    pub inner_index: usize,

    /// 当前大题的小题总数，每道大题单独询问
    pub inner_count: usize,
}

impl SubproblemCtx {
    pub fn new(
        outer_index: usize,
        outer_count: usize,
        inner_index: usize,
        inner_count: usize,
    ) -> Self {
        Self {
            outer_index,
            outer_count,
            inner_index,
            inner_count,
        }
    }
}

impl Display for SubproblemCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Question {}/{} part {}/{}]",
            self.outer_index, self.outer_count, self.inner_index, self.inner_count
        )
    }
}
