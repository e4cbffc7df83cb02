//! # Form Filler
//!
//! 从 JSON / YAML 文件导入表单，在控制台逐题作答，并导出为 JSON 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（输入/输出流），只暴露能力
//! - `Console` - 唯一的控制台 owner，提供 say() / read_line()
//!
//! ### ② 模型层（Models）
//! - `models/` - `Form` / `Question` 数据结构与格式分发表
//! - `models/loaders` - 按扩展名选择解码器加载表单
//!
//! ### ③ 业务能力层（Services）
//! - `AnswerCollector` - 逐题提问、校验、重试
//! - `FormExporter` - 序列化并写入 `<name>_submitted.json`
//!
//! ### ④ 流程层（Workflow）
//! - `FillFlow` - 收集 → 展示 → 写文件
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/session` - 菜单状态机，管理会话中的当前表单

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{FormError, FormResult};
pub use infrastructure::Console;
pub use models::{load_form, Form, FormFormat, Question};
pub use orchestrator::{App, SessionState};
pub use services::{AnswerCollector, CollectSummary, FormExporter};
pub use workflow::{FillFlow, FillOutcome};
