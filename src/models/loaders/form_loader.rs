use std::path::Path;

use tokio::fs;

use crate::error::{FormError, FormResult};
use crate::models::form::Form;
use crate::models::format::FormFormat;

/// 从 JSON / YAML 文件加载表单
///
/// 先按路径后缀识别格式，不支持的格式不会读取文件内容。
///
/// # 参数
/// - `path`: 表单文件路径（`.json` / `.yaml` / `.yml`，区分大小写）
///
/// # 返回
/// 返回解析后的表单；后缀不支持返回 `UnsupportedFormat`，
/// 文件不存在或不可读返回 `Io`，内容无法解码（含非法 UTF-8）返回 `Parse`
pub async fn load_form(path: impl AsRef<Path>) -> FormResult<Form> {
    let path = path.as_ref();

    let format = FormFormat::detect(path).ok_or_else(|| FormError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read(path)
        .await
        .map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let form = format.decode(&content).map_err(|source| FormError::Parse {
        path: path.to_path_buf(),
        format,
        source,
    })?;

    tracing::info!(
        "成功加载表单 {} ({}): {} 个问题",
        form.name,
        format,
        form.questions.len()
    );

    Ok(form)
}
