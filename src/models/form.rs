use serde::{Deserialize, Serialize};

/// 表单：一组有序的问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// 表单名称，导出文件名的前缀
    pub name: String,
    /// 问题列表，顺序即展示与作答顺序
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Form {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    /// 已作答的问题数量
    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.answer.is_some())
            .count()
    }

    /// 所有问题都已作答（空表单视为已完成）
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }
}

/// 单个问题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 问题文本
    #[serde(rename = "question")]
    pub text: String,

    /// 允许的选项，为空时接受任意输入
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// 仅作提示，不强制非空
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    /// 作答结果（小写）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// 判断答案是否合法
    ///
    /// 有选项时必须与某个选项忽略大小写相等；无选项时任何输入（包括空串）都合法。
    pub fn accepts(&self, answer: &str) -> bool {
        if !self.has_options() {
            return true;
        }
        let answer = answer.to_lowercase();
        self.options
            .iter()
            .any(|option| option.to_lowercase() == answer)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
