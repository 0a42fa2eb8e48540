//! 结果展示 - 业务能力层
//!
//! 把评估阶段或结果换算为界面上要显示的内容，不持有状态

use crate::models::EvaluationResult;

pub const PROCESSING_STATUS: &str = "Processing... This may take a few moments";
pub const COMPLETE_STATUS: &str = "Evaluation complete! Scroll down to see results.";

/// 界面需要显示的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// 状态栏文字
    pub status_line: String,
    /// 结果面板中的原始 markdown，None 表示隐藏结果面板
    pub body: Option<String>,
    /// 是否滚动到结果区域
    pub scroll_into_view: bool,
}

/// 请求发出后、结果返回前的界面
pub fn render_processing() -> ResultView {
    ResultView {
        status_line: PROCESSING_STATUS.to_string(),
        body: None,
        scroll_into_view: false,
    }
}

/// 结果返回后的界面
pub fn render(result: &EvaluationResult) -> ResultView {
    match result {
        EvaluationResult::Report { markdown_content } => ResultView {
            status_line: COMPLETE_STATUS.to_string(),
            body: Some(markdown_content.clone()),
            scroll_into_view: true,
        },
        EvaluationResult::Failed { message } => ResultView {
            status_line: format!("Error: {}", message),
            body: None,
            scroll_into_view: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report() {
        let view = render(&EvaluationResult::Report {
            markdown_content: "# Report".into(),
        });
        assert_eq!(view.status_line, COMPLETE_STATUS);
        assert_eq!(view.body.as_deref(), Some("# Report"));
        assert!(view.scroll_into_view);
    }

    #[test]
    fn test_render_failure() {
        let view = render(&EvaluationResult::Failed {
            message: "Upload failed".into(),
        });
        assert_eq!(view.status_line, "Error: Upload failed");
        assert_eq!(view.body, None);
        assert!(!view.scroll_into_view);
    }

    #[test]
    fn test_render_processing_hides_result() {
        let view = render_processing();
        assert_eq!(view.status_line, PROCESSING_STATUS);
        assert_eq!(view.body, None);
    }
}
