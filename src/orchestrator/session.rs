//! 会话编排器 - 编排层
//!
//! 管理一次自评会话的完整生命周期：
//! 身份信息 → 输出目录 → 作业编号和大题数 → 逐题自评 → 写出两份记录

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::infrastructure::{PromptBackend, Prompter};
use crate::models::{GradeRecords, Identity};
use crate::orchestrator::problem_processor::{process_problems, SessionStats};
use crate::services::{IdentityStore, RecordWriter, WrittenFiles};
use crate::utils::logging;
use crate::workflow::SubproblemFlow;

/// 会话结果
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub assignment: usize,
    pub records: GradeRecords,
    pub stats: SessionStats,
    pub files: WrittenFiles,
}

/// 应用主结构
pub struct App<B> {
    config: Config,
    prompter: Prompter<B>,
    identity_store: IdentityStore,
    writer: RecordWriter,
    identity: Identity,
}

impl<B: PromptBackend> App<B> {
    /// 初始化应用：确保身份信息和输出目录存在
    pub async fn initialize(config: Config, backend: B) -> Result<Self> {
        logging::log_startup(&config);

        let mut prompter = Prompter::new(backend);
        let identity_store = IdentityStore::new(&config.info_file);
        let identity = identity_store
            .ensure(&mut prompter)
            .await
            .with_context(|| {
                format!("Could not load identity from {}", config.info_file.display())
            })?;

        let writer = RecordWriter::from_config(&config);
        writer
            .ensure_folder()
            .await
            .context("Could not prepare output folder")?;

        Ok(Self {
            config,
            prompter,
            identity_store,
            writer,
            identity,
        })
    }

    /// 运行一次自评会话
    pub async fn run(&mut self) -> Result<SessionReport> {
        let mut records = GradeRecords::seeded(&self.identity);
        info!(
            "👤 Grading as {} <{}> ({})",
            self.identity.name,
            self.identity.email,
            self.identity_store.path().display()
        );

        let assignment = self.prompter.ask_positive_int("HW #?").await?;
        let outer_count = self
            .prompter
            .ask_positive_int("How many numbered questions?")
            .await?;

        let flow = SubproblemFlow::new(self.config.verbose_logging);
        let stats = process_problems(&mut self.prompter, &mut records, &flow, outer_count).await?;

        let files = self
            .writer
            .write_pair(assignment, &records)
            .await
            .with_context(|| format!("Could not save self-grades for HW {}", assignment))?;

        logging::print_final_stats(stats.questions, stats.subproblems, stats.comments);

        Ok(SessionReport {
            assignment,
            records,
            stats,
            files,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn prompter(&self) -> &Prompter<B> {
        &self.prompter
    }
}
