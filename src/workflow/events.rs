//! 界面事件
//!
//! 界面层把用户操作翻译成这些事件交给协调器

use crate::error::FileRejection;
use crate::models::{EvaluationResult, SelectedFile};

/// 用户操作
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// 选择或拖入了文件（None 表示选择框里没有文件）
    FileSelected(Option<SelectedFile>),
    /// 清除已选文件
    FileCleared,
    /// 新增一道问题
    QuestionAdded,
    /// 删除指定问题
    QuestionRemoved(u64),
    /// 编辑指定问题
    QuestionEdited { id: u64, text: String, weight: String },
    /// 修改性别权重
    GenderWeightsChanged { male: String, female: String },
    /// 勾选或取消授权复选框
    ConsentCheckboxToggled(bool),
    /// 点击授权弹窗的同意按钮
    ConsentAccepted,
    /// 关闭授权弹窗
    ConsentClosed,
    /// 点击"评估简历"
    SubmitRequested,
}

/// 处理一个事件之后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 只更新了界面状态
    Updated,
    /// 文件通过校验并成为当前文件
    FileAccepted,
    /// 文件未通过校验，选择已清空
    FileRejected(FileRejection),
    /// 等待用户在授权弹窗中确认
    AwaitingConsent,
    /// 未勾选复选框就点了同意
    ConsentRequired,
    /// 用户关闭了授权弹窗，本次提交静默结束
    Abandoned,
    /// 已有请求在进行中，本次操作被忽略
    Busy,
    /// 请求已完成
    Completed(EvaluationResult),
}
