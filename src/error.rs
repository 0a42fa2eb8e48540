use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件读取错误
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 问卷 TOML 解析失败
    #[error("问卷解析失败 ({path}): {source}")]
    QuestionsParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 文件校验失败原因
///
/// 校验顺序固定：未选择 → 类型错误 → 过大 → 为空
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// 选择控件中没有文件
    #[error("未选择文件")]
    NotSelected,
    /// MIME 类型不是 application/pdf
    #[error("文件类型错误: {mime_type}")]
    WrongType { mime_type: String },
    /// 超过 10 MiB
    #[error("文件过大: {size_bytes} 字节")]
    TooLarge { size_bytes: u64 },
    /// 0 字节
    #[error("文件为空")]
    Empty,
}

/// 授权声明错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsentError {
    /// 未勾选复选框就点击了同意
    #[error("未勾选同意声明")]
    CheckboxUnchecked,
}

/// 评估接口传输错误
///
/// 只表示"请求没有拿到 HTTP 响应"，非 2xx 响应不属于此类
#[derive(Debug, Error)]
pub enum TransportError {
    /// 读取待上传文件失败
    #[error("读取简历文件失败 ({path}): {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }
}

impl TransportError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
