//! # Resume Evaluate Submit
//!
//! 把简历 PDF 和加权问卷提交给外部评估服务，并展示返回的 markdown 报告
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源，只暴露能力
//! - `EvaluationClient` - 唯一的 HTTP 客户端，发送 multipart 请求
//! - `UiSurface` - 界面抽象，`ConsoleSurface` 是终端实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不持有会话
//! - `file_validator` - 文件类型、大小校验
//! - `QuestionSetEditor` - 问卷增删改和收集
//! - `ConsentGate` - 一次性数据使用授权
//! - `result_renderer` - 结果展示
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整流程
//! - `UiEvent` - 界面事件
//! - `SubmissionCoordinator` - 流程编排（校验 → 授权 → 收集 → 发送 → 展示）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 命令行会话

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ConsentError, FileRejection, TransportError};
pub use infrastructure::{ConsoleSurface, EvaluationClient, EvaluationTransport, UiSurface};
pub use models::{EvaluationResult, Question, SelectedFile};
pub use orchestrator::App;
pub use workflow::{FlowOutcome, SubmissionCoordinator, UiEvent};
