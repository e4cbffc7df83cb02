use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// 配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "FORM_FILLER_CONFIG";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 导出文件目录，为空表示当前目录
    pub output_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 填表完成后是否直接结束会话
    pub exit_after_fill: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::new(),
            verbose_logging: false,
            exit_after_fill: true,
        }
    }
}

impl Config {
    /// 环境变量覆盖默认值，无法解析的值保持默认
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    /// 若设置了 `FORM_FILLER_CONFIG` 则先读文件，再应用环境变量
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Ok(Self::from_toml_file(Path::new(&path))?.with_env_overrides()),
            Err(_) => Ok(Self::from_env()),
        }
    }

    fn with_env_overrides(self) -> Self {
        Self {
            output_dir: std::env::var("FORM_OUTPUT_DIR").map(PathBuf::from).unwrap_or(self.output_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            exit_after_fill: std::env::var("EXIT_AFTER_FILL").ok().and_then(|v| v.parse().ok()).unwrap_or(self.exit_after_fill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::new());
        assert!(!config.verbose_logging);
        assert!(config.exit_after_fill);
    }

    #[test]
    fn test_partial_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form_filler.toml");
        std::fs::write(&path, "output_dir = \"submissions\"\nexit_after_fill = false\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("submissions"));
        assert!(!config.exit_after_fill);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_invalid_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "verbose_logging = \"loud\"").unwrap();

        assert!(Config::from_toml_file(&path).is_err());
        assert!(Config::from_toml_file(&dir.path().join("missing.toml")).is_err());
    }
}
