//! 文件校验 - 业务能力层
//!
//! 只负责判断"这个文件能不能上传"，不持有任何状态

use crate::error::FileRejection;
use crate::models::{FileInfoView, Notification, SelectedFile, PDF_MIME_TYPE};

/// 文件大小上限：10 MiB
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// 校验发生的时机，决定提示文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    /// 选择或拖入文件时
    Selection,
    /// 点击提交时的复查
    Submission,
}

/// 校验候选文件
///
/// 顺序固定且短路：未选择 → 类型错误 → 过大 → 为空
pub fn validate(candidate: Option<&SelectedFile>) -> Result<(), FileRejection> {
    let file = candidate.ok_or(FileRejection::NotSelected)?;

    if file.mime_type != PDF_MIME_TYPE {
        return Err(FileRejection::WrongType {
            mime_type: file.mime_type.clone(),
        });
    }

    if file.size_bytes > MAX_FILE_SIZE {
        return Err(FileRejection::TooLarge {
            size_bytes: file.size_bytes,
        });
    }

    if file.size_bytes == 0 {
        return Err(FileRejection::Empty);
    }

    Ok(())
}

/// 把字节数格式化为可读大小
///
/// 以 1024 为进制，单位下标为 floor(log1024(bytes))，保留两位小数并去掉末尾的 0
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    while index + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(index as u32 + 1) {
        index += 1;
    }

    let value = bytes as f64 / 1024f64.powi(index as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[index])
}

impl FileRejection {
    /// 提示框标题
    pub fn title(&self) -> &'static str {
        match self {
            FileRejection::NotSelected => "No File Selected",
            FileRejection::WrongType { .. } => "Invalid File Type",
            FileRejection::TooLarge { .. } => "File Size Exceeded",
            FileRejection::Empty => "Empty File",
        }
    }

    /// 生成错误提示
    pub fn notification(&self, stage: ValidationStage) -> Notification {
        let message = match (self, stage) {
            (FileRejection::NotSelected, _) => {
                "Please select a PDF file first before proceeding with evaluation.".to_string()
            }
            (FileRejection::WrongType { .. }, ValidationStage::Selection) => {
                "Please upload a PDF file only.\nOther file formats are not supported.".to_string()
            }
            (FileRejection::WrongType { .. }, ValidationStage::Submission) => {
                "Please upload a PDF file only.".to_string()
            }
            (FileRejection::TooLarge { size_bytes }, ValidationStage::Selection) => format!(
                "Your file is {}\nMaximum allowed size is 10 MB.\n\nPlease compress your PDF or select a smaller file.",
                format_file_size(*size_bytes)
            ),
            (FileRejection::TooLarge { size_bytes }, ValidationStage::Submission) => format!(
                "Your file is {}\nMaximum allowed size is 10 MB.",
                format_file_size(*size_bytes)
            ),
            (FileRejection::Empty, _) => {
                "The selected file is empty.\nPlease select a valid PDF file.".to_string()
            }
        };
        Notification::error(self.title(), message)
    }

    /// 文件信息栏的错误状态，未选择文件时没有信息栏
    pub fn file_info(&self) -> Option<FileInfoView> {
        let (name_line, size_line) = match self {
            FileRejection::NotSelected => return None,
            FileRejection::WrongType { .. } => {
                ("Error: Please upload a PDF file only".to_string(), String::new())
            }
            FileRejection::TooLarge { size_bytes } => (
                "Error: File too large".to_string(),
                format!(
                    "File size: {} (Maximum: 10 MB)",
                    format_file_size(*size_bytes)
                ),
            ),
            FileRejection::Empty => ("Error: Empty file".to_string(), String::new()),
        };
        Some(FileInfoView {
            is_error: true,
            name_line,
            size_line,
        })
    }
}

/// 文件通过校验后的信息栏
pub fn accepted_file_info(file: &SelectedFile) -> FileInfoView {
    FileInfoView {
        is_error: false,
        name_line: file.name.clone(),
        size_line: format!("File size: {}", format_file_size(file.size_bytes)),
    }
}

/// 文件通过校验后的提示
pub fn accepted_notification(file: &SelectedFile) -> Notification {
    Notification::success(
        "File Selected Successfully!",
        format!(
            "File: {}\nSize: {}\n\nClick \"Evaluate Resume\" to proceed.",
            file.name,
            format_file_size(file.size_bytes)
        ),
    )
}
