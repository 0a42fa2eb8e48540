/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;
use crate::models::{EvaluationResult, SelectedFile};
use crate::services::format_file_size;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 简历评估提交");
    info!("🌐 评估接口: {}", config.evaluation_endpoint);
    info!(
        "⏰ 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录提交前的摘要
///
/// # 参数
/// - `file`: 待上传的简历
/// - `question_count`: 问卷中有效问题数量
pub fn log_submission(file: &SelectedFile, question_count: usize) {
    info!("\n{}", "─".repeat(60));
    info!("📤 正在提交简历: {} ({})", file.name, format_file_size(file.size_bytes));
    info!("📋 有效问题: {} 道", question_count);
    info!("{}", "─".repeat(60));
}

/// 打印最终结果
///
/// # 参数
/// - `result`: 最后一次评估结果，None 表示没有发出请求
/// - `report_path`: 报告保存路径，None 表示未保存
pub fn print_final_stats(result: Option<&EvaluationResult>, report_path: Option<&str>) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match result {
        Some(EvaluationResult::Report { markdown_content }) => {
            info!("✅ 评估成功，报告长度: {} 字符", markdown_content.chars().count());
        }
        Some(EvaluationResult::Failed { message }) => {
            info!("❌ 评估失败: {}", message);
        }
        None => {
            info!("⚠️ 未发出评估请求");
        }
    }
    info!("{}", "=".repeat(60));
    if let Some(path) = report_path {
        info!("\n报告已保存至: {}", path);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
