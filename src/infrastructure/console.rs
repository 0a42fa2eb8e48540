//! 终端界面
//!
//! 把界面变化输出到日志，评估报告原文打印到标准输出

use tracing::{debug, error, info, warn};

use crate::infrastructure::UiSurface;
use crate::models::{FileInfoView, Notification, NotificationKind, QuestionRow};
use crate::services::{ConsentView, ResultView};
use crate::utils::logging::truncate_text;

/// 终端界面
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    verbose: bool,
}

impl ConsoleSurface {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl UiSurface for ConsoleSurface {
    fn notify(&self, notification: &Notification) {
        let text = notification.message.replace('\n', " ");
        match notification.kind {
            NotificationKind::Error => error!("{} {}: {}", notification.kind.icon(), notification.title, text),
            NotificationKind::Warning => warn!("{} {}: {}", notification.kind.icon(), notification.title, text),
            _ => info!("{} {}: {}", notification.kind.icon(), notification.title, text),
        }
    }

    fn show_file_info(&self, info: &FileInfoView) {
        if info.is_error {
            warn!("📄 {} {}", info.name_line, info.size_line);
        } else {
            info!("📄 {} | {}", info.name_line, info.size_line);
        }
    }

    fn hide_file_info(&self) {
        debug!("文件信息栏已隐藏");
    }

    fn reset_file_input(&self) {
        debug!("文件选择已复位");
    }

    fn render_questions(&self, rows: &[QuestionRow]) {
        if !self.verbose {
            return;
        }
        for row in rows {
            info!(
                "  {}: {} [权重: {}]",
                row.label(),
                truncate_text(&row.text, 60),
                row.weight
            );
        }
    }

    fn update_consent(&self, view: &ConsentView) {
        debug!("授权弹窗: {:?}", view);
        if view.error_visible {
            warn!("⚠️ 请先勾选同意数据使用声明");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        debug!("提交按钮: {}", if enabled { "启用" } else { "禁用" });
    }

    fn show_result(&self, view: &ResultView) {
        info!("{}", view.status_line);
        if let Some(body) = &view.body {
            println!("{}", body);
        }
    }
}
