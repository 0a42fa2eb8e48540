use crate::error::{AppError, AppResult};
use crate::models::question::{default_questions, QuestionDefault};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 问卷文件结构
///
/// ```toml
/// [[questions]]
/// question = "Does the candidate have experience in Rust"
/// weight = 10
/// ```
#[derive(Debug, Deserialize)]
struct QuestionnaireFile {
    #[serde(default)]
    questions: Vec<QuestionDefault>,
}

/// 解析问卷 TOML 内容
pub fn parse_questionnaire(content: &str, path: &str) -> AppResult<Vec<QuestionDefault>> {
    let file: QuestionnaireFile =
        toml::from_str(content).map_err(|e| AppError::QuestionsParse {
            path: path.to_string(),
            source: e,
        })?;
    Ok(file.questions)
}

/// 从 TOML 文件加载问卷默认项
///
/// 文件不存在时回退到内置的示例问题
pub async fn load_questionnaire(path: &Path) -> AppResult<Vec<QuestionDefault>> {
    if !path.exists() {
        tracing::info!("问卷文件不存在: {}，使用内置示例问题", path.display());
        return Ok(default_questions());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file(path.display().to_string(), e))?;

    let questions = parse_questionnaire(&content, &path.display().to_string())?;
    tracing::info!(
        "正在加载: {}，共 {} 道问题",
        path.file_name().unwrap_or_default().to_string_lossy(),
        questions.len()
    );

    Ok(questions)
}
