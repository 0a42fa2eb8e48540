//! 问卷编辑 - 业务能力层
//!
//! 维护一个有序、可增删的问题行列表

use crate::models::{Question, QuestionDefault, QuestionRow};

/// 问卷编辑器
///
/// 行标识由内部计数器分配，单调递增，删除后也不会复用
#[derive(Debug, Default)]
pub struct QuestionSetEditor {
    rows: Vec<QuestionRow>,
    counter: u64,
}

impl QuestionSetEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_row(&mut self, text: String, weight: String) -> u64 {
        self.counter += 1;
        let id = self.counter;
        self.rows.push(QuestionRow { id, text, weight });
        id
    }

    /// 追加一个空行，返回新行的标识
    pub fn add_question(&mut self) -> u64 {
        self.push_row(String::new(), String::new())
    }

    /// 删除指定行，不存在时什么也不做
    pub fn remove_question(&mut self, id: u64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// 更新指定行的内容，返回该行是否存在
    pub fn edit_question(&mut self, id: u64, text: impl Into<String>, weight: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.text = text.into();
                row.weight = weight.into();
                true
            }
            None => false,
        }
    }

    /// 按默认项逐个追加行
    pub fn initialize(&mut self, defaults: &[QuestionDefault]) {
        for default in defaults {
            self.push_row(default.question.clone(), default.weight.clone());
        }
    }

    /// 收集当前所有非空问题，保持插入顺序
    pub fn collect(&self) -> Vec<Question> {
        self.rows.iter().filter_map(QuestionRow::to_question).collect()
    }

    pub fn rows(&self) -> &[QuestionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
