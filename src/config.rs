use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认配置文件名（存在时才读取）
pub const DEFAULT_CONFIG_FILE: &str = "selfgrade.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 身份信息文件（首次运行时生成）
    pub info_file: PathBuf,
    /// 自评结果输出目录
    pub output_folder: PathBuf,
    /// 输出文件名前缀，后接作业编号
    pub file_prefix: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            info_file: PathBuf::from("info.json"),
            output_folder: PathBuf::from("selfgrades"),
            file_prefix: "selfgrades-".to_string(),
            verbose_logging: false,
        }
    }
}

/// `selfgrade.toml` 的内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    info_file: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    file_prefix: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 → 配置文件 → 环境变量
    pub fn load() -> AppResult<Self> {
        let config_path = std::env::var("SELFGRADE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::default();
        if config_path.exists() {
            config = config.merge_file(&config_path)?;
        }
        config.apply_env()
    }

    /// 叠加 TOML 配置文件
    pub fn merge_file(self, path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&content, path)
    }

    fn merge_toml(self, content: &str, path: &Path) -> AppResult<Self> {
        let file: FileConfig =
            toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            info_file: file.info_file.unwrap_or(self.info_file),
            output_folder: file.output_folder.unwrap_or(self.output_folder),
            file_prefix: file.file_prefix.unwrap_or(self.file_prefix),
            verbose_logging: file.verbose_logging.unwrap_or(self.verbose_logging),
        })
    }

    /// 叠加环境变量
    pub fn apply_env(self) -> AppResult<Self> {
        let verbose_logging = match std::env::var("VERBOSE_LOGGING") {
            Ok(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING".to_string(),
                    value,
                    expected_type: "bool",
                })?,
            Err(_) => self.verbose_logging,
        };

        Ok(Self {
            info_file: std::env::var("SELFGRADE_INFO_FILE")
                .map(PathBuf::from)
                .unwrap_or(self.info_file),
            output_folder: std::env::var("SELFGRADE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.output_folder),
            file_prefix: std::env::var("SELFGRADE_FILE_PREFIX").unwrap_or(self.file_prefix),
            verbose_logging,
        })
    }

    /// 以某个根目录为基准的配置（测试和脚本化运行使用）
    pub fn rooted_at(root: &Path) -> Self {
        let default = Self::default();
        Self {
            info_file: root.join(default.info_file),
            output_folder: root.join(default.output_folder),
            ..default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_original_layout() {
        let config = Config::default();
        assert_eq!(config.info_file, PathBuf::from("info.json"));
        assert_eq!(config.output_folder, PathBuf::from("selfgrades"));
        assert_eq!(config.file_prefix, "selfgrades-");
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_merge_toml_overrides_only_present_fields() {
        let config = Config::default()
            .merge_toml(
                "output_folder = \"grades\"\nverbose_logging = true\n",
                Path::new("selfgrade.toml"),
            )
            .unwrap();

        assert_eq!(config.output_folder, PathBuf::from("grades"));
        assert!(config.verbose_logging);
        assert_eq!(config.info_file, PathBuf::from("info.json"));
        assert_eq!(config.file_prefix, "selfgrades-");
    }

    #[test]
    fn test_merge_toml_rejects_unknown_keys() {
        let result = Config::default().merge_toml("colour = \"red\"\n", Path::new("x.toml"));
        assert!(matches!(
            result,
            Err(crate::error::AppError::Config(ConfigError::TomlParseFailed { .. }))
        ));
    }

    #[test]
    fn test_rooted_at_joins_paths() {
        let config = Config::rooted_at(Path::new("/tmp/hw"));
        assert_eq!(config.info_file, PathBuf::from("/tmp/hw/info.json"));
        assert_eq!(config.output_folder, PathBuf::from("/tmp/hw/selfgrades"));
    }

    // 环境变量是进程级共享状态，相关测试串行执行并在结束时恢复原值
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    const ENV_VARS: [&str; 5] = [
        "SELFGRADE_CONFIG",
        "SELFGRADE_INFO_FILE",
        "SELFGRADE_OUTPUT_DIR",
        "SELFGRADE_FILE_PREFIX",
        "VERBOSE_LOGGING",
    ];

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: std::sync::MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        /// 清空所有相关变量，再设置给定的值
        fn set(vars: &[(&'static str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let saved = ENV_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect();
            for name in ENV_VARS {
                std::env::remove_var(name);
            }
            for (name, value) in vars {
                std::env::set_var(name, value);
            }
            Self { saved, _lock: lock }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
    }

    #[test]
    fn test_apply_env_overrides_every_field() {
        let _env = EnvGuard::set(&[
            ("SELFGRADE_INFO_FILE", "/srv/me.json"),
            ("SELFGRADE_OUTPUT_DIR", "/srv/grades"),
            ("SELFGRADE_FILE_PREFIX", "hw-"),
            ("VERBOSE_LOGGING", "true"),
        ]);

        let config = Config::default().apply_env().unwrap();

        assert_eq!(
            config,
            Config {
                info_file: PathBuf::from("/srv/me.json"),
                output_folder: PathBuf::from("/srv/grades"),
                file_prefix: "hw-".to_string(),
                verbose_logging: true,
            }
        );
    }

    #[test]
    fn test_apply_env_without_variables_keeps_values() {
        let _env = EnvGuard::set(&[]);

        let config = Config::rooted_at(Path::new("/tmp/hw")).apply_env().unwrap();

        assert_eq!(config, Config::rooted_at(Path::new("/tmp/hw")));
    }

    #[test]
    fn test_invalid_verbose_logging_is_rejected() {
        let _env = EnvGuard::set(&[("VERBOSE_LOGGING", "maybe")]);

        let result = Config::default().apply_env();

        match result {
            Err(crate::error::AppError::Config(ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            })) => {
                assert_eq!(var_name, "VERBOSE_LOGGING");
                assert_eq!(value, "maybe");
                assert_eq!(expected_type, "bool");
            }
            other => panic!("expected EnvVarParseFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reads_config_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "output_folder = \"from-file\"\nfile_prefix = \"file-\"\n",
        )
        .unwrap();
        let path_str = path.to_string_lossy().into_owned();
        let _env = EnvGuard::set(&[
            ("SELFGRADE_CONFIG", path_str.as_str()),
            ("SELFGRADE_FILE_PREFIX", "env-"),
        ]);

        let config = Config::load().unwrap();

        assert_eq!(config.output_folder, PathBuf::from("from-file"));
        assert_eq!(config.file_prefix, "env-");
        assert_eq!(config.info_file, PathBuf::from("info.json"));
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let missing_str = missing.to_string_lossy().into_owned();
        let _env = EnvGuard::set(&[("SELFGRADE_CONFIG", missing_str.as_str())]);

        assert_eq!(Config::load().unwrap(), Config::default());
    }
}
