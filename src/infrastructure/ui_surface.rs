//! 界面抽象 - 基础设施层
//!
//! 状态机只通过这个 trait 改变界面，不依赖具体的展示方式

use crate::models::{FileInfoView, Notification, QuestionRow};
use crate::services::{ConsentView, ResultView};

/// 界面能力
///
/// 方法都是同步的，实现方自行处理内部可变性
pub trait UiSurface: Send + Sync {
    /// 弹出提示框
    fn notify(&self, notification: &Notification);

    /// 显示文件信息栏（成功或错误状态）
    fn show_file_info(&self, info: &FileInfoView);

    /// 隐藏文件信息栏
    fn hide_file_info(&self);

    /// 复位文件选择控件
    fn reset_file_input(&self);

    /// 重新绘制问卷
    fn render_questions(&self, rows: &[QuestionRow]);

    /// 更新授权弹窗
    fn update_consent(&self, view: &ConsentView);

    /// 启用或禁用提交按钮
    fn set_submit_enabled(&self, enabled: bool);

    /// 更新状态栏和结果面板
    fn show_result(&self, view: &ResultView);
}
