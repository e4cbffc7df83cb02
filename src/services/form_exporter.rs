//! 表单导出服务 - 业务能力层
//!
//! 只负责"把表单写成 JSON 文件"能力

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{FormError, FormResult};
use crate::models::Form;

/// 导出文件名后缀
const SUBMITTED_SUFFIX: &str = "_submitted.json";

/// 表单导出服务
///
/// 无论导入格式是什么，导出总是 2 空格缩进的 JSON，文件名为 `<name>_submitted.json`，
/// 已存在的同名文件会被覆盖。
#[derive(Debug, Clone, Default)]
pub struct FormExporter {
    output_dir: PathBuf,
}

impl FormExporter {
    /// 输出到当前目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 输出到指定目录
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 导出文件路径
    pub fn submitted_path(&self, form: &Form) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", form.name, SUBMITTED_SUFFIX))
    }

    /// 序列化为 2 空格缩进的 JSON
    ///
    /// # 参数
    /// - `form`: 已（部分）作答的表单
    ///
    /// # 返回
    /// 返回 JSON 文本；序列化失败返回 `Serialize`
    pub fn render(&self, form: &Form) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(form)?)
    }

    /// 写入已序列化的内容，同名文件直接覆盖
    ///
    /// # 参数
    /// - `form`: 用于生成文件名的表单
    /// - `rendered`: `render` 生成的 JSON 文本
    ///
    /// # 返回
    /// 返回写入的文件路径；写入失败返回 `Write`
    pub async fn write(&self, form: &Form, rendered: &str) -> FormResult<PathBuf> {
        let path = self.submitted_path(form);
        debug!("写入导出文件: {} ({} 字节)", path.display(), rendered.len());

        fs::write(&path, rendered)
            .await
            .map_err(|source| FormError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
