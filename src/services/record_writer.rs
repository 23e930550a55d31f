//! 自评记录写入服务 - 业务能力层
//!
//! 只负责输出目录和两份记录文件，不关心提问流程

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{GradeRecords, Record};

/// 一次会话写出的两个文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub graded: PathBuf,
    pub redo: PathBuf,
}

/// 自评记录写入服务
///
/// 两个文件先写到 `.tmp`，都成功后再改名，避免只留下其中一个
pub struct RecordWriter {
    folder: PathBuf,
    prefix: String,
}

impl RecordWriter {
    pub fn new(folder: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.output_folder, &config.file_prefix)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// 创建输出目录（已存在时什么都不做）
    pub async fn ensure_folder(&self) -> AppResult<()> {
        fs::create_dir_all(&self.folder)
            .await
            .map_err(|e| AppError::create_dir_failed(&self.folder, e))?;
        info!("📁 Output folder ready: {}", self.folder.display());
        Ok(())
    }

    pub fn graded_path(&self, assignment: usize) -> PathBuf {
        self.folder.join(format!("{}{}.txt", self.prefix, assignment))
    }

    pub fn redo_path(&self, assignment: usize) -> PathBuf {
        self.folder.join(format!("{}{}-redo.txt", self.prefix, assignment))
    }

    /// 写出两份记录
    ///
    /// # 参数
    /// - `assignment`: 作业编号，决定文件名
    /// - `records`: 本次会话的两份记录
    pub async fn write_pair(
        &self,
        assignment: usize,
        records: &GradeRecords,
    ) -> AppResult<WrittenFiles> {
        let targets = [
            (self.graded_path(assignment), &records.graded),
            (self.redo_path(assignment), &records.redo),
        ];

        let mut staged = Vec::with_capacity(targets.len());
        for (path, record) in &targets {
            info!("Writing {}", path.display());
            match stage(path, record).await {
                Ok(tmp) => staged.push(tmp),
                Err(e) => {
                    discard(&staged).await;
                    return Err(e);
                }
            }
        }

        // 改名阶段失败时回滚：删除已改名的目标和尚未改名的临时文件
        let mut committed: Vec<PathBuf> = Vec::with_capacity(staged.len());
        for (index, ((path, _), tmp)) in targets.iter().zip(&staged).enumerate() {
            if let Err(e) = fs::rename(tmp, path).await {
                discard(&staged[index..]).await;
                discard(&committed).await;
                return Err(AppError::file_write_failed(path, e));
            }
            committed.push(path.clone());
            info!("Finished writing to {}", path.display());
        }

        let [(graded, _), (redo, _)] = targets;
        Ok(WrittenFiles { graded, redo })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

async fn stage(path: &Path, record: &Record) -> AppResult<PathBuf> {
    let content = record
        .to_json()
        .map_err(|e| AppError::json_serialize_failed(path, e))?;
    let tmp = staging_path(path);
    if let Err(e) = fs::write(&tmp, content).await {
        discard(std::slice::from_ref(&tmp)).await;
        return Err(AppError::file_write_failed(path, e));
    }
    Ok(tmp)
}

async fn discard(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path).await {
            warn!("⚠️ Could not remove {}: {}", path.display(), e);
        }
    }
}
