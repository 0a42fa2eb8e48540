//! 评估接口传输 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"把一次请求发出去"的能力

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::TransportError;
use crate::models::{EvaluationRequest, RawResponse};

/// ngrok 免费隧道需要这个头才会跳过浏览器警告页
pub const NGROK_SKIP_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// 评估请求的发送能力
///
/// 只负责拿到 HTTP 响应，不解释状态码
#[async_trait]
pub trait EvaluationTransport: Send + Sync {
    async fn send(&self, request: EvaluationRequest) -> Result<RawResponse, TransportError>;
}

/// 基于 reqwest 的评估接口客户端
///
/// 不设置超时，也不重试
pub struct EvaluationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EvaluationClient {
    /// 创建新的评估接口客户端
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 构建 multipart 表单
    async fn build_form(&self, request: EvaluationRequest) -> Result<Form, TransportError> {
        let data = request
            .file
            .source
            .read()
            .await
            .map_err(|e| TransportError::ReadFile {
                path: request.file.source.describe(),
                source: e,
            })?;

        let file_part = Part::bytes(data)
            .file_name(request.file.name.clone())
            .mime_str(&request.file.mime_type)
            .map_err(|e| TransportError::request_failed(&self.endpoint, e))?;

        Ok(Form::new()
            .part("file", file_part)
            .text("questions_data", request.questions_data)
            .text("gender_weights", request.gender_weights))
    }
}

#[async_trait]
impl EvaluationTransport for EvaluationClient {
    async fn send(&self, request: EvaluationRequest) -> Result<RawResponse, TransportError> {
        debug!("questions_data: {}", request.questions_data);
        debug!("gender_weights: {}", request.gender_weights);

        let form = self.build_form(request).await?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(NGROK_SKIP_WARNING_HEADER, "true")
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::request_failed(&self.endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::request_failed(&self.endpoint, e))?;

        debug!("评估接口返回状态码: {}, 响应长度: {} 字符", status, body.len());

        Ok(RawResponse { status, body })
    }
}
