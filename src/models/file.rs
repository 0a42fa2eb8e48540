use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// 唯一允许上传的 MIME 类型
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// 文件内容来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// 磁盘文件，发送时才读取
    Path(PathBuf),
    /// 内存中的数据
    Memory(Vec<u8>),
}

impl FileSource {
    /// 读取完整文件内容
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        match self {
            FileSource::Path(path) => tokio::fs::read(path).await,
            FileSource::Memory(data) => Ok(data.clone()),
        }
    }

    /// 用于日志和错误信息的来源描述
    pub fn describe(&self) -> String {
        match self {
            FileSource::Path(path) => path.display().to_string(),
            FileSource::Memory(data) => format!("<内存 {} 字节>", data.len()),
        }
    }
}

/// 当前选中的简历文件
///
/// 同一时刻最多存在一个；每次重新选择都会整体替换
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
        source: FileSource,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            source,
        }
    }

    /// 从内存数据创建，大小取数据长度
    pub fn in_memory(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        let size_bytes = data.len() as u64;
        Self::new(name, size_bytes, mime_type, FileSource::Memory(data))
    }

    /// 从磁盘路径创建
    ///
    /// 只读取元数据，MIME 类型按扩展名声明（与浏览器的行为一致，不检查文件内容）
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| AppError::file(path.display().to_string(), e))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_type_for_name(&name);

        Ok(Self::new(
            name,
            metadata.len(),
            mime_type,
            FileSource::Path(path.to_path_buf()),
        ))
    }
}

/// 根据文件名扩展名推断声明的 MIME 类型，未知扩展名返回空字符串
pub fn mime_type_for_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => PDF_MIME_TYPE,
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_name() {
        assert_eq!(mime_type_for_name("resume.pdf"), PDF_MIME_TYPE);
        assert_eq!(mime_type_for_name("RESUME.PDF"), PDF_MIME_TYPE);
        assert_eq!(mime_type_for_name("resume.docx"), "application/vnd.openxmlformats-officedocument.wordprocessingml.document");
        assert_eq!(mime_type_for_name("resume"), "");
        assert_eq!(mime_type_for_name("resume.pdf.exe"), "");
    }

    #[test]
    fn test_in_memory_size() {
        let file = SelectedFile::in_memory("a.pdf", PDF_MIME_TYPE, vec![1, 2, 3]);
        assert_eq!(file.size_bytes, 3);
        assert_eq!(file.source.describe(), "<内存 3 字节>");
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let result = SelectedFile::from_path(Path::new("definitely/not/here.pdf")).await;
        assert!(matches!(result, Err(AppError::File { .. })));
    }
}
