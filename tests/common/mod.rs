#![allow(dead_code)]

use async_trait::async_trait;
use resume_evaluate_submit::error::TransportError;
use resume_evaluate_submit::models::{
    EvaluationRequest, FileInfoView, FileSource, Notification, QuestionRow, RawResponse,
    SelectedFile, PDF_MIME_TYPE,
};
use resume_evaluate_submit::services::{ConsentView, ResultView};
use resume_evaluate_submit::{EvaluationTransport, SubmissionCoordinator, UiSurface};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// 记录所有请求并返回预设响应的传输层
pub struct FakeTransport {
    response: Mutex<Option<RawResponse>>,
    requests: Mutex<Vec<EvaluationRequest>>,
    calls: AtomicUsize,
    release: Option<Arc<Notify>>,
}

impl FakeTransport {
    /// 每次返回同一个响应
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Mutex::new(Some(RawResponse::new(status, body))),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            release: None,
        }
    }

    /// 模拟网络层失败
    pub fn failing() -> Self {
        Self {
            response: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            release: None,
        }
    }

    /// 收到请求后等待 `release` 通知才返回
    pub fn blocking(status: u16, body: &str, release: Arc<Notify>) -> Self {
        Self {
            release: Some(release),
            ..Self::responding(status, body)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<EvaluationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl EvaluationTransport for FakeTransport {
    async fn send(&self, request: EvaluationRequest) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if let Some(release) = &self.release {
            release.notified().await;
        }

        let response = self.response.lock().unwrap().clone();
        response.ok_or_else(|| TransportError::ReadFile {
            path: "fake".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        })
    }
}

/// 界面调用记录
#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    Notify(Notification),
    ShowFileInfo(FileInfoView),
    HideFileInfo,
    ResetFileInput,
    RenderQuestions(usize),
    UpdateConsent(ConsentView),
    SetSubmitEnabled(bool),
    ShowResult(ResultView),
}

/// 记录所有界面调用的界面实现
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Mutex<Vec<UiCall>>,
}

impl RecordingSurface {
    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                UiCall::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn submit_toggles(&self) -> Vec<bool> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                UiCall::SetSubmitEnabled(enabled) => Some(enabled),
                _ => None,
            })
            .collect()
    }

    pub fn last_result(&self) -> Option<ResultView> {
        self.calls().into_iter().rev().find_map(|c| match c {
            UiCall::ShowResult(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_consent(&self) -> Option<ConsentView> {
        self.calls().into_iter().rev().find_map(|c| match c {
            UiCall::UpdateConsent(view) => Some(view),
            _ => None,
        })
    }

    fn push(&self, call: UiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl UiSurface for RecordingSurface {
    fn notify(&self, notification: &Notification) {
        self.push(UiCall::Notify(notification.clone()));
    }

    fn show_file_info(&self, info: &FileInfoView) {
        self.push(UiCall::ShowFileInfo(info.clone()));
    }

    fn hide_file_info(&self) {
        self.push(UiCall::HideFileInfo);
    }

    fn reset_file_input(&self) {
        self.push(UiCall::ResetFileInput);
    }

    fn render_questions(&self, rows: &[QuestionRow]) {
        self.push(UiCall::RenderQuestions(rows.len()));
    }

    fn update_consent(&self, view: &ConsentView) {
        self.push(UiCall::UpdateConsent(*view));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.push(UiCall::SetSubmitEnabled(enabled));
    }

    fn show_result(&self, view: &ResultView) {
        self.push(UiCall::ShowResult(view.clone()));
    }
}

pub type TestCoordinator = SubmissionCoordinator<FakeTransport, RecordingSurface>;

pub fn coordinator(transport: FakeTransport) -> TestCoordinator {
    SubmissionCoordinator::new(transport, RecordingSurface::default())
}

/// 指定大小的 PDF 描述（不会真正读取）
pub fn pdf_of_size(size_bytes: u64) -> SelectedFile {
    SelectedFile::new(
        "resume.pdf",
        size_bytes,
        PDF_MIME_TYPE,
        FileSource::Path(PathBuf::from("resume.pdf")),
    )
}
