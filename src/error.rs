use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::FormFormat;

/// 表单处理错误类型
///
/// Display 文本直接展示给控制台用户
#[derive(Debug, Error)]
pub enum FormError {
    /// 表单文件不存在或无法读取
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 文件内容无法被对应格式解码
    #[error("failed to parse {format} form {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        format: FormFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 不支持的文件扩展名
    #[error("unsupported file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// 表单无法序列化为 JSON
    #[error("failed to format filled form: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 导出文件写入失败
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 控制台输入流已结束
    #[error("input stream closed")]
    InputClosed,

    /// 控制台读写失败
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

impl FormError {
    /// 是否为控制台层面的不可恢复错误
    pub fn is_console_failure(&self) -> bool {
        matches!(self, FormError::InputClosed | FormError::Console(_))
    }
}

/// 表单处理结果类型
pub type FormResult<T> = Result<T, FormError>;
