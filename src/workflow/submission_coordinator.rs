//! 提交协调 - 流程层
//!
//! 核心职责：定义"一次评估提交"的完整流程
//!
//! 流程顺序：
//! 1. 复查当前文件 → 不通过则提示并清空选择
//! 2. 未授权 → 打开授权弹窗并挂起，等待同意或关闭
//! 3. 收集问卷和性别权重 → 发出唯一一次请求
//! 4. 展示报告或错误信息
//!
//! 请求进行中提交按钮保持禁用，任何退出路径都会重新启用

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::error::FileRejection;
use crate::infrastructure::{EvaluationTransport, UiSurface};
use crate::models::evaluation::GENERIC_UPLOAD_ERROR;
use crate::models::{
    EvaluationRequest, EvaluationResult, GenderWeights, Question, QuestionDefault, QuestionRow,
    SelectedFile,
};
use crate::services::consent_gate::{ConsentState, ConsentView};
use crate::services::file_validator::{self, ValidationStage};
use crate::services::result_renderer;
use crate::services::{ConsentGate, QuestionSetEditor};
use crate::utils::logging::log_submission;
use crate::workflow::events::{FlowOutcome, UiEvent};

/// 会话状态
///
/// 只在当前进程内有效，不做持久化
#[derive(Debug, Default)]
struct Session {
    selected_file: Option<SelectedFile>,
    questions: QuestionSetEditor,
    male_weight: String,
    female_weight: String,
    consent: ConsentGate,
    last_result: Option<EvaluationResult>,
}

impl Session {
    fn gender_weights(&self) -> GenderWeights {
        GenderWeights::from_inputs(&self.male_weight, &self.female_weight)
    }

    /// 通过校验的当前文件
    fn current_file(&self) -> Result<SelectedFile, FileRejection> {
        file_validator::validate(self.selected_file.as_ref())?;
        self.selected_file.clone().ok_or(FileRejection::NotSelected)
    }
}

/// 请求进行中的标记
///
/// 创建时禁用提交按钮，离开作用域时恢复
struct InFlightGuard<'a, U: UiSurface> {
    flag: &'a AtomicBool,
    ui: &'a U,
}

impl<'a, U: UiSurface> InFlightGuard<'a, U> {
    fn acquire(flag: &'a AtomicBool, ui: &'a U) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        ui.set_submit_enabled(false);
        Some(Self { flag, ui })
    }
}

impl<U: UiSurface> Drop for InFlightGuard<'_, U> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.ui.set_submit_enabled(true);
    }
}

/// 提交协调器
///
/// - 持有会话状态（文件、问卷、性别权重、授权）
/// - 决定何时校验、何时询问授权、何时发请求
/// - 只依赖传输能力和界面能力，不关心它们的具体实现
pub struct SubmissionCoordinator<T, U> {
    transport: T,
    ui: U,
    session: Mutex<Session>,
    in_flight: AtomicBool,
}

impl<T, U> SubmissionCoordinator<T, U>
where
    T: EvaluationTransport,
    U: UiSurface,
{
    /// 创建新的提交协调器
    pub fn new(transport: T, ui: U) -> Self {
        Self {
            transport,
            ui,
            session: Mutex::new(Session::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 处理一个界面事件
    pub async fn handle(&self, event: UiEvent) -> FlowOutcome {
        match event {
            UiEvent::FileSelected(file) => self.select_file(file),
            UiEvent::FileCleared => {
                self.clear_file();
                FlowOutcome::Updated
            }
            UiEvent::QuestionAdded => {
                self.add_question();
                FlowOutcome::Updated
            }
            UiEvent::QuestionRemoved(id) => {
                self.remove_question(id);
                FlowOutcome::Updated
            }
            UiEvent::QuestionEdited { id, text, weight } => {
                self.edit_question(id, text, weight);
                FlowOutcome::Updated
            }
            UiEvent::GenderWeightsChanged { male, female } => {
                self.set_gender_weights(male, female);
                FlowOutcome::Updated
            }
            UiEvent::ConsentCheckboxToggled(checked) => {
                self.toggle_consent_checkbox(checked);
                FlowOutcome::Updated
            }
            UiEvent::ConsentAccepted => self.accept_consent().await,
            UiEvent::ConsentClosed => self.close_consent(),
            UiEvent::SubmitRequested => self.submit().await,
        }
    }

    // ========== 文件选择 ==========

    /// 选择文件并立即校验
    pub fn select_file(&self, file: Option<SelectedFile>) -> FlowOutcome {
        let Some(file) = file else {
            debug!("选择框中没有文件，忽略");
            return FlowOutcome::Updated;
        };

        match file_validator::validate(Some(&file)) {
            Ok(()) => {
                info!("✓ 已选择文件: {}", file.name);
                self.ui.show_file_info(&file_validator::accepted_file_info(&file));
                self.ui.notify(&file_validator::accepted_notification(&file));
                self.session().selected_file = Some(file);
                FlowOutcome::FileAccepted
            }
            Err(rejection) => {
                warn!("⚠️ 文件未通过校验 ({}): {}", file.name, rejection);
                self.reject_file(&rejection, ValidationStage::Selection);
                FlowOutcome::FileRejected(rejection)
            }
        }
    }

    /// 清除已选文件
    pub fn clear_file(&self) {
        self.session().selected_file = None;
        self.ui.reset_file_input();
        self.ui.hide_file_info();
    }

    fn reject_file(&self, rejection: &FileRejection, stage: ValidationStage) {
        self.session().selected_file = None;
        self.ui.reset_file_input();
        if stage == ValidationStage::Selection {
            if let Some(info) = rejection.file_info() {
                self.ui.show_file_info(&info);
            }
        }
        self.ui.notify(&rejection.notification(stage));
    }

    // ========== 问卷 ==========

    /// 用默认项初始化问卷
    pub fn initialize_questions(&self, defaults: &[QuestionDefault]) {
        let mut session = self.session();
        session.questions.initialize(defaults);
        self.ui.render_questions(session.questions.rows());
    }

    /// 新增空问题，返回行标识
    pub fn add_question(&self) -> u64 {
        let mut session = self.session();
        let id = session.questions.add_question();
        self.ui.render_questions(session.questions.rows());
        id
    }

    /// 删除问题，不存在时什么也不做
    pub fn remove_question(&self, id: u64) -> bool {
        let mut session = self.session();
        let removed = session.questions.remove_question(id);
        if removed {
            self.ui.render_questions(session.questions.rows());
        }
        removed
    }

    /// 编辑问题
    pub fn edit_question(&self, id: u64, text: impl Into<String>, weight: impl Into<String>) -> bool {
        let mut session = self.session();
        let edited = session.questions.edit_question(id, text, weight);
        if edited {
            self.ui.render_questions(session.questions.rows());
        }
        edited
    }

    /// 设置性别权重的原始输入
    pub fn set_gender_weights(&self, male: impl Into<String>, female: impl Into<String>) {
        let mut session = self.session();
        session.male_weight = male.into();
        session.female_weight = female.into();
    }

    // ========== 授权 ==========

    pub fn toggle_consent_checkbox(&self, checked: bool) {
        let mut session = self.session();
        session.consent.set_checkbox(checked);
        self.ui.update_consent(&session.consent.view());
    }

    /// 点击同意
    ///
    /// 勾选后授权并继续挂起的提交；未勾选则显示行内错误
    pub async fn accept_consent(&self) -> FlowOutcome {
        let accepted = {
            let mut session = self.session();
            if !session.consent.is_open() {
                debug!("授权弹窗未打开，忽略同意操作");
                return FlowOutcome::Updated;
            }
            let accepted = session.consent.accept();
            self.ui.update_consent(&session.consent.view());
            accepted
        };

        match accepted {
            Ok(()) => {
                info!("✓ 用户已同意数据使用声明");
                self.dispatch().await
            }
            Err(e) => {
                debug!("同意失败: {}", e);
                FlowOutcome::ConsentRequired
            }
        }
    }

    /// 关闭授权弹窗，挂起的提交静默结束
    pub fn close_consent(&self) -> FlowOutcome {
        let mut session = self.session();
        if !session.consent.is_open() {
            return FlowOutcome::Updated;
        }
        session.consent.close();
        self.ui.update_consent(&session.consent.view());
        debug!("用户关闭了授权弹窗，本次提交结束");
        FlowOutcome::Abandoned
    }

    // ========== 提交 ==========

    /// 点击"评估简历"
    pub async fn submit(&self) -> FlowOutcome {
        if self.is_submitting() {
            debug!("已有评估请求在进行中，忽略重复提交");
            return FlowOutcome::Busy;
        }

        let check = {
            let session = self.session();
            session
                .current_file()
                .map(|_| session.consent.is_granted())
        };

        match check {
            Err(rejection) => {
                warn!("⚠️ 提交前校验未通过: {}", rejection);
                self.reject_file(&rejection, ValidationStage::Submission);
                FlowOutcome::FileRejected(rejection)
            }
            Ok(false) => {
                let mut session = self.session();
                session.consent.open();
                self.ui.update_consent(&session.consent.view());
                info!("📝 等待用户同意数据使用声明");
                FlowOutcome::AwaitingConsent
            }
            Ok(true) => self.dispatch().await,
        }
    }

    /// 收集数据并发出请求
    async fn dispatch(&self) -> FlowOutcome {
        let snapshot = {
            let session = self.session();
            session
                .current_file()
                .map(|file| (file, session.questions.collect(), session.gender_weights()))
        };

        let (file, questions, gender_weights) = match snapshot {
            Ok(snapshot) => snapshot,
            Err(rejection) => {
                warn!("⚠️ 发送前校验未通过: {}", rejection);
                self.reject_file(&rejection, ValidationStage::Submission);
                return FlowOutcome::FileRejected(rejection);
            }
        };

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, &self.ui) else {
            debug!("已有评估请求在进行中，忽略重复提交");
            return FlowOutcome::Busy;
        };

        log_submission(&file, questions.len());

        let result = match build_request(file, &questions, &gender_weights) {
            Ok(request) => {
                self.ui.show_result(&result_renderer::render_processing());
                self.send(request).await
            }
            Err(e) => {
                error!("❌ 构建请求失败: {}", e);
                EvaluationResult::Failed {
                    message: e.to_string(),
                }
            }
        };

        self.ui.show_result(&result_renderer::render(&result));
        self.session().last_result = Some(result.clone());

        FlowOutcome::Completed(result)
    }

    async fn send(&self, request: EvaluationRequest) -> EvaluationResult {
        match self.transport.send(request).await {
            Ok(response) => {
                let result = EvaluationResult::from_response(&response);
                match &result {
                    EvaluationResult::Report { .. } => {
                        info!("✓ 评估完成 (状态码: {})", response.status);
                    }
                    EvaluationResult::Failed { message } => {
                        warn!("⚠️ 评估失败 (状态码: {}): {}", response.status, message);
                    }
                }
                result
            }
            Err(e) => {
                error!("❌ 评估请求失败: {}", e);
                EvaluationResult::Failed {
                    message: GENERIC_UPLOAD_ERROR.to_string(),
                }
            }
        }
    }

    // ========== 状态查询 ==========

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.session().selected_file.clone()
    }

    pub fn consent_state(&self) -> ConsentState {
        self.session().consent.state()
    }

    pub fn consent_view(&self) -> ConsentView {
        self.session().consent.view()
    }

    pub fn question_rows(&self) -> Vec<QuestionRow> {
        self.session().questions.rows().to_vec()
    }

    pub fn collect_questions(&self) -> Vec<Question> {
        self.session().questions.collect()
    }

    pub fn gender_weights(&self) -> GenderWeights {
        self.session().gender_weights()
    }

    /// 最后一次展示的评估结果
    pub fn last_result(&self) -> Option<EvaluationResult> {
        self.session().last_result.clone()
    }
}

/// 构建评估请求，两个附带字段编码为 JSON 字符串
fn build_request(
    file: SelectedFile,
    questions: &[Question],
    gender_weights: &GenderWeights,
) -> Result<EvaluationRequest, serde_json::Error> {
    Ok(EvaluationRequest {
        file,
        questions_data: serde_json::to_string(questions)?,
        gender_weights: serde_json::to_string(gender_weights)?,
    })
}
