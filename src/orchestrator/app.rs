//! 终端会话 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建 HTTP 客户端和终端界面，加载问卷
//! 2. **事件驱动**：把命令行参数和终端输入翻译成界面事件
//! 3. **授权确认**：在终端询问用户是否同意（或按配置自动同意）
//! 4. **结果输出**：保存评估报告并输出统计

use crate::config::Config;
use crate::infrastructure::{ConsoleSurface, EvaluationClient};
use crate::models::{load_questionnaire, EvaluationResult, SelectedFile};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{FlowOutcome, SubmissionCoordinator, UiEvent};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    coordinator: SubmissionCoordinator<EvaluationClient, ConsoleSurface>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let coordinator = SubmissionCoordinator::new(
            EvaluationClient::new(&config.evaluation_endpoint),
            ConsoleSurface::new(config.verbose_logging),
        );

        // 加载问卷
        let defaults = load_questionnaire(Path::new(&config.questions_file))
            .await
            .context("无法加载问卷")?;
        coordinator.initialize_questions(&defaults);
        coordinator.set_gender_weights(config.male_weight.clone(), config.female_weight.clone());

        Ok(Self {
            config,
            coordinator,
        })
    }

    /// 运行一次评估
    pub async fn run(&self, resume_path: &Path) -> Result<()> {
        let file = SelectedFile::from_path(resume_path)
            .await
            .with_context(|| format!("无法读取简历: {}", resume_path.display()))?;

        let selected = self
            .coordinator
            .handle(UiEvent::FileSelected(Some(file)))
            .await;
        if let FlowOutcome::FileRejected(rejection) = selected {
            warn!("⚠️ 简历未通过校验，程序结束: {}", rejection);
            print_final_stats(None, None);
            return Ok(());
        }

        let mut outcome = self.coordinator.handle(UiEvent::SubmitRequested).await;
        if outcome == FlowOutcome::AwaitingConsent {
            outcome = self.resolve_consent().await?;
        }

        let report_path = match &outcome {
            FlowOutcome::Completed(EvaluationResult::Report { markdown_content }) => {
                self.save_report(markdown_content).await?;
                Some(self.config.output_report_file.as_str())
            }
            FlowOutcome::Abandoned => {
                info!("未同意数据使用声明，本次评估已取消");
                None
            }
            _ => None,
        };

        print_final_stats(self.coordinator.last_result().as_ref(), report_path);

        Ok(())
    }

    /// 处理授权弹窗
    async fn resolve_consent(&self) -> Result<FlowOutcome> {
        let agreed = if self.config.assume_consent {
            info!("已配置自动同意数据使用声明");
            true
        } else {
            ask_for_consent().await?
        };

        if !agreed {
            return Ok(self.coordinator.handle(UiEvent::ConsentClosed).await);
        }

        self.coordinator
            .handle(UiEvent::ConsentCheckboxToggled(true))
            .await;
        Ok(self.coordinator.handle(UiEvent::ConsentAccepted).await)
    }

    /// 保存评估报告
    async fn save_report(&self, markdown_content: &str) -> Result<()> {
        tokio::fs::write(&self.config.output_report_file, markdown_content)
            .await
            .with_context(|| format!("无法写入报告文件: {}", self.config.output_report_file))?;
        Ok(())
    }
}

/// 在终端询问是否同意上传
async fn ask_for_consent() -> Result<bool> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(
            "我同意将简历上传至评估服务，并知晓其内容将被用于自动评估 [y/N]: ".as_bytes(),
        )
        .await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("无法读取终端输入")?;

    Ok(is_affirmative(&line))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
