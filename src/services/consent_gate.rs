//! 数据使用授权 - 业务能力层
//!
//! 一次性开关：同意后整个会话内不再询问

use crate::error::ConsentError;

/// 授权状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsentState {
    /// 初始状态
    #[default]
    NotGranted,
    /// 已同意（会话内终态）
    Granted,
}

/// 弹窗在界面上的样子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentView {
    pub open: bool,
    pub checkbox_checked: bool,
    pub accept_enabled: bool,
    pub error_visible: bool,
}

/// 授权弹窗与授权状态
#[derive(Debug, Default)]
pub struct ConsentGate {
    state: ConsentState,
    modal_open: bool,
    checkbox_checked: bool,
    error_visible: bool,
}

impl ConsentGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn is_granted(&self) -> bool {
        self.state == ConsentState::Granted
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_checkbox_checked(&self) -> bool {
        self.checkbox_checked
    }

    /// 同意按钮是否可点
    pub fn is_accept_enabled(&self) -> bool {
        self.checkbox_checked
    }

    /// 行内错误提示是否显示
    pub fn is_error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn view(&self) -> ConsentView {
        ConsentView {
            open: self.modal_open,
            checkbox_checked: self.checkbox_checked,
            accept_enabled: self.is_accept_enabled(),
            error_visible: self.error_visible,
        }
    }

    /// 打开弹窗，复选框、按钮和错误提示都复位
    pub fn open(&mut self) {
        self.modal_open = true;
        self.checkbox_checked = false;
        self.error_visible = false;
    }

    /// 切换复选框
    pub fn set_checkbox(&mut self, checked: bool) {
        self.checkbox_checked = checked;
        if checked {
            self.error_visible = false;
        }
    }

    /// 点击同意
    ///
    /// 未勾选时显示行内错误并保持 NotGranted
    pub fn accept(&mut self) -> Result<(), ConsentError> {
        if !self.checkbox_checked {
            self.error_visible = true;
            return Err(ConsentError::CheckboxUnchecked);
        }

        self.state = ConsentState::Granted;
        self.modal_open = false;
        self.error_visible = false;
        Ok(())
    }

    /// 关闭弹窗，授权状态不变
    pub fn close(&mut self) {
        self.modal_open = false;
    }
}
