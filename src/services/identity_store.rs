//! 身份信息存储 - 业务能力层
//!
//! 只负责读写 info.json，首次运行时通过提示采集身份信息

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{PromptBackend, Prompter};
use crate::models::Identity;

/// 身份信息存储
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件是否存在；无法判断时（例如权限不足）返回错误
    pub async fn exists(&self) -> AppResult<bool> {
        fs::try_exists(&self.path)
            .await
            .map_err(|e| AppError::file_read_failed(&self.path, e))
    }

    /// 读取身份信息，文件损坏或缺少字段时返回错误
    pub async fn load(&self) -> AppResult<Identity> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::file_read_failed(&self.path, e))?;

        let identity: Identity = serde_json::from_str(&content)
            .map_err(|e| AppError::json_parse_failed(&self.path, e))?;

        debug!("Loaded identity for {} from {}", identity.name, self.path.display());
        Ok(identity)
    }

    pub async fn save(&self, identity: &Identity) -> AppResult<()> {
        let content = serde_json::to_string(identity)
            .map_err(|e| AppError::json_serialize_failed(&self.path, e))?;

        info!("Writing {}", self.path.display());
        fs::write(&self.path, content)
            .await
            .map_err(|e| AppError::file_write_failed(&self.path, e))?;
        info!("Finished writing to {}", self.path.display());

        Ok(())
    }

    /// 确保身份信息存在
    ///
    /// 文件不存在时提示输入姓名、邮箱、学号并保存；之后总是从文件读取
    pub async fn ensure<B: PromptBackend>(
        &self,
        prompter: &mut Prompter<B>,
    ) -> AppResult<Identity> {
        if !self.exists().await? {
            let file_name = self
                .path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            prompter.announce(&format!("First time, generating {}", file_name));

            let name = prompter.ask_required_text("Name?").await?;
            let email = prompter.ask_required_text("Email?").await?;
            let sid = prompter.ask_required_text("SID?").await?;

            self.save(&Identity::new(name, email, sid)).await?;
        }

        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use crate::infrastructure::ScriptedBackend;

    #[tokio::test]
    async fn test_first_run_prompts_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::new(dir.path().join("info.json"));
        let mut prompter =
            Prompter::new(ScriptedBackend::new(["Jane Doe", "", "jane@x.edu", "123456789"]));

        let identity = store.ensure(&mut prompter).await.unwrap();

        assert_eq!(identity, Identity::new("Jane Doe", "jane@x.edu", "123456789"));
        assert!(store.exists().await.unwrap());
        assert_eq!(prompter.backend().rejections(), &["A value is required.".to_string()]);
        assert_eq!(
            prompter.backend().announcements(),
            &["First time, generating info.json".to_string()]
        );
    }

    #[tokio::test]
    async fn test_existing_identity_skips_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(
            &path,
            r#"{"name":"Jane Doe","email":"janedoe@berkeley.edu","sid":"123456789"}"#,
        )
        .unwrap();
        let store = IdentityStore::new(&path);
        let mut prompter = Prompter::new(ScriptedBackend::default());

        let identity = store.ensure(&mut prompter).await.unwrap();

        assert_eq!(identity.email, "janedoe@berkeley.edu");
        assert!(prompter.backend().requests().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_identity_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(&path, r#"{"name":"Jane Doe"}"#).unwrap();

        let result = IdentityStore::new(&path).load().await;

        assert!(matches!(
            result,
            Err(AppError::File(FileError::JsonParseFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn test_unreadable_location_is_not_treated_as_first_run() {
        let dir = tempfile::tempdir().unwrap();
        // 父路径是普通文件，检查 info.json 时得到 ENOTDIR 而不是 NotFound
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = IdentityStore::new(blocker.join("info.json"));
        let mut prompter = Prompter::new(ScriptedBackend::new(["Jane Doe"]));

        let result = store.ensure(&mut prompter).await;

        assert!(matches!(
            result,
            Err(AppError::File(FileError::ReadFailed { .. }))
        ));
        assert!(prompter.backend().requests().is_empty());
        assert!(prompter.backend().announcements().is_empty());
    }
}
