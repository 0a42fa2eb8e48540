/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 简历评估接口地址
    pub evaluation_endpoint: String,
    /// 问卷 TOML 文件路径（不存在时使用内置默认问题）
    pub questions_file: String,
    /// 男性权重（原始输入，无法解析时按 0 处理）
    pub male_weight: String,
    /// 女性权重（原始输入，无法解析时按 0 处理）
    pub female_weight: String,
    /// 评估报告输出文件
    pub output_report_file: String,
    /// 是否自动同意数据使用声明（跳过交互确认）
    pub assume_consent: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            evaluation_endpoint: "https://tabular-denver-actually.ngrok-free.dev/process-docling2/"
                .to_string(),
            questions_file: "questions.toml".to_string(),
            male_weight: String::new(),
            female_weight: String::new(),
            output_report_file: "report.md".to_string(),
            assume_consent: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            evaluation_endpoint: std::env::var("EVALUATION_ENDPOINT").unwrap_or(default.evaluation_endpoint),
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            male_weight: std::env::var("MALE_WEIGHT").unwrap_or(default.male_weight),
            female_weight: std::env::var("FEMALE_WEIGHT").unwrap_or(default.female_weight),
            output_report_file: std::env::var("OUTPUT_REPORT_FILE").unwrap_or(default.output_report_file),
            assume_consent: std::env::var("ASSUME_CONSENT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.assume_consent),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
