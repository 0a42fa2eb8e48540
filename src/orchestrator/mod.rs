//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (命令行 → 界面事件)
//!     ↓
//! workflow::SubmissionCoordinator (校验 → 授权 → 收集 → 发送 → 展示)
//!     ↓
//! services (能力层：文件校验 / 问卷 / 授权 / 结果展示)
//!     ↓
//! infrastructure (基础设施：EvaluationClient / UiSurface)
//! ```

pub mod app;

pub use app::App;
