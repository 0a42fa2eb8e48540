use serde::Deserialize;
use serde_json::Value;

use crate::models::file::SelectedFile;

/// 接口失败时的兜底提示
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed";

/// 发往评估接口的一次请求
///
/// 两个附带字段已经是 JSON 字符串，传输层原样放进 multipart
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub file: SelectedFile,
    pub questions_data: String,
    pub gender_weights: String,
}

/// 评估接口的原始 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 成功响应体
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationResponse {
    #[serde(default)]
    pub markdown_content: String,
    /// 服务端解析到的问题（仅用于诊断日志）
    #[serde(default)]
    pub received_questions: Option<Value>,
}

/// 错误响应体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// 从错误响应体中提取提示信息，取不到时使用兜底文案
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.detail)
            .and_then(|detail| match detail {
                Value::Null | Value::Bool(false) => None,
                Value::String(s) if s.is_empty() => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string())
    }
}

/// 一次评估的结果，只保留最后一次展示的值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    /// 评估成功，得到 markdown 报告
    Report { markdown_content: String },
    /// 网络或服务端错误
    Failed { message: String },
}

impl EvaluationResult {
    pub fn is_report(&self) -> bool {
        matches!(self, EvaluationResult::Report { .. })
    }

    /// 把原始响应解释为评估结果
    pub fn from_response(response: &RawResponse) -> Self {
        if !response.is_success() {
            return EvaluationResult::Failed {
                message: ErrorResponse::message_from_body(&response.body),
            };
        }

        match serde_json::from_str::<EvaluationResponse>(&response.body) {
            Ok(parsed) => {
                if let Some(received) = &parsed.received_questions {
                    tracing::debug!("服务端解析到的问题: {}", received);
                }
                EvaluationResult::Report {
                    markdown_content: parsed.markdown_content,
                }
            }
            Err(e) => EvaluationResult::Failed {
                message: format!("Invalid response from server: {}", e),
            },
        }
    }
}
