//! 大题处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **遍历大题**：按 1..M 顺序询问每道大题的小题数
//! 2. **遍历小题**：按 1..N 顺序调用 `SubproblemFlow`
//! 3. **统计输出**：记录小题数和说明数
//!
//! 严格深度优先：一道大题的所有小题（包括说明）全部完成后才进入下一道大题。

use tracing::info;

use crate::error::AppResult;
use crate::infrastructure::{PromptBackend, Prompter};
use crate::models::GradeRecords;
use crate::workflow::{SubproblemCtx, SubproblemFlow};

/// 会话统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub questions: usize,
    pub subproblems: usize,
    pub comments: usize,
}

impl SessionStats {
    fn absorb(&mut self, other: SessionStats) {
        self.questions += other.questions;
        self.subproblems += other.subproblems;
        self.comments += other.comments;
    }
}

/// 处理所有大题
///
/// # 参数
/// - `prompter`: 提问入口
/// - `records`: 两份记录
/// - `flow`: 复用的小题流程
/// - `outer_count`: 大题总数
pub async fn process_problems<B: PromptBackend>(
    prompter: &mut Prompter<B>,
    records: &mut GradeRecords,
    flow: &SubproblemFlow,
    outer_count: usize,
) -> AppResult<SessionStats> {
    let mut stats = SessionStats::default();

    for outer_index in 1..=outer_count {
        prompter.announce(&format!("Question {}", outer_index));
        let inner_count = prompter.ask_positive_int("How many subproblems?").await?;

        let question_stats = process_subproblems(
            prompter,
            records,
            flow,
            outer_index,
            outer_count,
            inner_count,
        )
        .await?;

        stats.absorb(question_stats);
        log_question_complete(outer_index, outer_count, &question_stats);
    }

    Ok(stats)
}

/// 处理一道大题的所有小题
pub async fn process_subproblems<B: PromptBackend>(
    prompter: &mut Prompter<B>,
    records: &mut GradeRecords,
    flow: &SubproblemFlow,
    outer_index: usize,
    outer_count: usize,
    inner_count: usize,
) -> AppResult<SessionStats> {
    let mut stats = SessionStats {
        questions: 1,
        ..Default::default()
    };

    for inner_index in 1..=inner_count {
        let ctx = SubproblemCtx::new(outer_index, outer_count, inner_index, inner_count);
        let outcome = flow.run(prompter, records, &ctx).await?;

        stats.subproblems += 1;
        if outcome.comment.is_some() {
            stats.comments += 1;
        }
    }

    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_question_complete(outer_index: usize, outer_count: usize, stats: &SessionStats) {
    info!(
        "[Question {}/{}] ✓ {} subproblems graded, {} comments",
        outer_index, outer_count, stats.subproblems, stats.comments
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ScriptedBackend;
    use crate::models::Identity;

    fn records() -> GradeRecords {
        GradeRecords::seeded(&Identity::new("Jane Doe", "jane@x.edu", "123456789"))
    }

    #[tokio::test]
    async fn test_uneven_subproblem_counts() {
        // Question 1: a, b；Question 2: a
        let mut prompter = Prompter::new(ScriptedBackend::new([
            "2", "10", "5", "sign error", "1", "0",
        ]));
        let mut records = records();

        let stats = process_problems(&mut prompter, &mut records, &SubproblemFlow::default(), 2)
            .await
            .unwrap();

        assert_eq!(
            stats,
            SessionStats {
                questions: 2,
                subproblems: 3,
                comments: 1
            }
        );
        assert_eq!(
            records.graded.keys().collect::<Vec<_>>(),
            vec!["name", "email", "sid", "q1a", "q1b", "q1b-comment", "q2a"]
        );
        assert_eq!(
            records.redo.keys().collect::<Vec<_>>(),
            vec!["name", "email", "sid", "q1a", "q1b", "q2a"]
        );
        assert_eq!(
            prompter.backend().announcements(),
            &["Question 1".to_string(), "Question 2".to_string()]
        );
        assert_eq!(prompter.backend().remaining(), 0);
    }

    #[tokio::test]
    async fn test_m_by_k_score_keys() {
        let (m, k) = (3, 4);
        let mut answers = Vec::new();
        for _ in 0..m {
            answers.push("4".to_string());
            for inner in 0..k {
                if inner % 2 == 0 {
                    answers.push("8".to_string());
                    answers.push("close".to_string());
                } else {
                    answers.push("10".to_string());
                }
            }
        }
        let mut prompter = Prompter::new(ScriptedBackend::new(answers));
        let mut records = records();

        process_problems(&mut prompter, &mut records, &SubproblemFlow::default(), m)
            .await
            .unwrap();

        assert_eq!(records.graded.score_key_count(), m * k);
        assert_eq!(records.graded.comment_key_count(), m * k / 2);
        assert_eq!(records.redo.score_key_count(), m * k);
        assert_eq!(records.redo.comment_key_count(), 0);
        assert!(records
            .redo
            .keys()
            .filter(|key| key.starts_with('q'))
            .all(|key| records.redo.get(key) == Some("10")));
    }

    #[tokio::test]
    async fn test_non_positive_count_is_reasked() {
        let mut prompter = Prompter::new(ScriptedBackend::new(["0", "-1", "1", "10"]));
        let mut records = records();

        let stats = process_problems(&mut prompter, &mut records, &SubproblemFlow::default(), 1)
            .await
            .unwrap();

        assert_eq!(stats.subproblems, 1);
        assert_eq!(prompter.backend().rejections().len(), 2);
    }

    #[tokio::test]
    async fn test_long_question_uses_double_letters() {
        let mut answers = vec!["28".to_string()];
        answers.extend(std::iter::repeat("0".to_string()).take(28));
        let mut prompter = Prompter::new(ScriptedBackend::new(answers));
        let mut records = records();

        process_problems(&mut prompter, &mut records, &SubproblemFlow::default(), 1)
            .await
            .unwrap();

        assert_eq!(records.graded.get("q1z"), Some("0"));
        assert_eq!(records.graded.get("q1aa"), Some("0"));
        assert_eq!(records.graded.get("q1ab"), Some("0"));
        assert!(!records.graded.contains_key("q1ac"));
    }
}
