//! 填表流程 - 流程层
//!
//! 核心职责：定义"填一张表"的完整流程
//!
//! 流程顺序：
//! 1. 逐题收集答案
//! 2. 序列化并在控制台展示
//! 3. 写入 `<name>_submitted.json`（写入失败只提示，不中断）

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::FormResult;
use crate::infrastructure::Console;
use crate::models::Form;
use crate::services::{AnswerCollector, CollectSummary, FormExporter};

/// 填表结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// 已写入文件
    Submitted {
        path: PathBuf,
        summary: CollectSummary,
    },
    /// 作答完成但文件写入失败
    NotWritten { summary: CollectSummary },
}

impl FillOutcome {
    pub fn summary(&self) -> CollectSummary {
        match self {
            FillOutcome::Submitted { summary, .. } | FillOutcome::NotWritten { summary } => {
                *summary
            }
        }
    }
}

/// 填表流程
///
/// - 编排 收集 → 展示 → 写文件
/// - 不持有控制台，由调用方传入
pub struct FillFlow {
    collector: AnswerCollector,
    exporter: FormExporter,
}

impl FillFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            collector: AnswerCollector::new(),
            exporter: FormExporter::with_output_dir(&config.output_dir),
        }
    }

    pub async fn run<R: BufRead, W: Write>(
        &self,
        form: &mut Form,
        console: &mut Console<R, W>,
    ) -> FormResult<FillOutcome> {
        let summary = self.collector.collect(form, console)?;

        let rendered = self.exporter.render(form)?;
        console.say("Thank you for filling the form! Here is the filled form:")?;
        console.say(&rendered)?;

        match self.exporter.write(form, &rendered).await {
            Ok(path) => {
                info!("✓ 表单已导出: {}", path.display());
                console.say(format!("Filled form written to file: {}", path.display()))?;
                Ok(FillOutcome::Submitted { path, summary })
            }
            Err(e) => {
                warn!("⚠️ 表单导出失败: {}", e);
                console.say(format!("Error writing filled form to file: {}", e))?;
                Ok(FillOutcome::NotWritten { summary })
            }
        }
    }
}
