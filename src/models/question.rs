use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 数值权重
///
/// 由用户的原始输入换算而来：空白、非数字、非有限值都按 0 处理。
/// 整数值序列化为 JSON 整数（`10` 而不是 `10.0`）。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Weight(f64);

impl Weight {
    /// 解析原始输入
    pub fn parse(raw: &str) -> Self {
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        // -0 也按 0 处理
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self(0.0)
        }
    }
}

impl Serialize for Weight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // 2^53 以内的整数可以无损表示为 i64
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 提交给评估接口的一道问题
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub question: String,
    pub weightage: Weight,
}

/// 问卷中的一行（可编辑）
///
/// `text` 和 `weight` 保存用户的原始输入，提交时才换算
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    /// 行标识，整个会话内单调递增且不复用
    pub id: u64,
    pub text: String,
    pub weight: String,
}

impl QuestionRow {
    /// 显示用标签
    pub fn label(&self) -> String {
        format!("Question {}", self.id)
    }

    /// 两个输入框是否都为空
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.weight.trim().is_empty()
    }

    /// 换算为提交用的问题，空行返回 None
    pub fn to_question(&self) -> Option<Question> {
        if self.is_blank() {
            return None;
        }
        Some(Question {
            question: self.text.trim().to_string(),
            weightage: Weight::parse(&self.weight),
        })
    }
}

/// 问卷默认项（用于初始化）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDefault {
    pub question: String,
    #[serde(default, deserialize_with = "deserialize_weight_input")]
    pub weight: String,
}

impl QuestionDefault {
    pub fn new(question: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            weight: weight.into(),
        }
    }
}

/// 内置的五道示例问题
pub fn default_questions() -> Vec<QuestionDefault> {
    vec![
        QuestionDefault::new(
            "Does the candidate have background in Computer Science or Data analytic",
            "10",
        ),
        QuestionDefault::new(
            "Does the candidate have experience in Programming Language Python",
            "10",
        ),
        QuestionDefault::new(
            "Does the candidate have experience in Project Developement Python",
            "20",
        ),
        QuestionDefault::new("Does the candidate have experience in Machine Learning", "10"),
        QuestionDefault::new("Does the candidate graduate with CGPA 3.5 or above", "15"),
    ]
}

/// 性别权重
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GenderWeights {
    pub male: Weight,
    pub female: Weight,
}

impl GenderWeights {
    /// 从两个原始输入换算
    pub fn from_inputs(male: &str, female: &str) -> Self {
        Self {
            male: Weight::parse(male),
            female: Weight::parse(female),
        }
    }
}

// TOML 里的权重既可以写成字符串也可以写成数字
fn deserialize_weight_input<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct WeightVisitor;

    impl<'de> Visitor<'de> for WeightVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number representing a weight")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(WeightVisitor)
}
