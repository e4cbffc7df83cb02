//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! session::App (菜单状态机，持有 Console 与 SessionState)
//!     ↓
//! workflow::FillFlow (填一张表)
//!     ↓
//! services (能力层：collect / export)
//!     ↓
//! infrastructure (基础设施：Console)
//! ```

pub mod session;

pub use session::{App, MenuChoice, SessionState, Step};
