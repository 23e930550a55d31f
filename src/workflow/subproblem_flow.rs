//! 小题自评流程 - 流程层
//!
//! 核心职责：定义"一道小题"的完整自评流程
//!
//! 流程顺序：
//! 1. 计算字母编号，得到 `q{大题}{字母}`
//! 2. 选择分数
//! 3. 写入两份记录（redo 记满分）
//! 4. 部分得分时要求填写说明

use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::{PromptBackend, Prompter};
use crate::models::{GradeRecords, Score, SubproblemKey};
use crate::utils::logging::truncate_text;
use crate::workflow::subproblem_ctx::SubproblemCtx;

/// 小题自评结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubproblemOutcome {
    pub key: SubproblemKey,
    pub score: Score,
    pub comment: Option<String>,
}

/// 小题自评流程
///
/// - 只处理单个小题
/// - 不持有记录，记录由编排层传入
/// - 每一步提问都等待完成后才继续
#[derive(Debug, Default)]
pub struct SubproblemFlow {
    verbose_logging: bool,
}

impl SubproblemFlow {
    pub fn new(verbose_logging: bool) -> Self {
        Self { verbose_logging }
    }

    pub async fn run<B: PromptBackend>(
        &self,
        prompter: &mut Prompter<B>,
        records: &mut GradeRecords,
        ctx: &SubproblemCtx,
    ) -> AppResult<SubproblemOutcome> {
        let key = SubproblemKey::new(ctx.outer_index, ctx.inner_index)?;

        let score = prompter.ask_score(key.score_key()).await?;
        records.record_score(&key, score);

        let comment = if score.requires_comment() {
            let comment = prompter.ask_comment(&key.comment_key()).await?;
            records.record_comment(&key, comment.as_str());
            Some(comment)
        } else {
            None
        };

        self.log_outcome(ctx, &key, score, comment.as_deref());

        Ok(SubproblemOutcome {
            key,
            score,
            comment,
        })
    }

    fn log_outcome(
        &self,
        ctx: &SubproblemCtx,
        key: &SubproblemKey,
        score: Score,
        comment: Option<&str>,
    ) {
        match comment {
            Some(text) if self.verbose_logging => {
                info!("{} ✓ {} = {} ({})", ctx, key, score, truncate_text(text, 40));
            }
            _ => debug!("{} ✓ {} = {}", ctx, key, score),
        }
    }
}
