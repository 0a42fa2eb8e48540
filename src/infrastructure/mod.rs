//! 基础设施层
//!
//! 持有稀缺资源（HTTP 客户端、终端），只暴露能力

pub mod console;
pub mod transport;
pub mod ui_surface;

pub use console::ConsoleSurface;
pub use transport::{EvaluationClient, EvaluationTransport};
pub use ui_surface::UiSurface;
