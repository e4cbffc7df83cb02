//! 作答收集服务 - 业务能力层
//!
//! 只负责"逐题提问并校验答案"能力，不关心导出

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::FormResult;
use crate::infrastructure::Console;
use crate::models::{Form, Question};
use crate::utils::logging::truncate_text;

/// 收集统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// 已作答题数
    pub answered: usize,
    /// 被拒绝的输入次数
    pub rejected: usize,
}

/// 作答收集服务
///
/// 职责：
/// - 按顺序展示每个问题
/// - 校验答案是否在选项内，不合法则重新提问（无次数上限）
/// - 答案以小写形式写回 `Question::answer`
/// - required 只做提示，不强制非空
#[derive(Debug, Default)]
pub struct AnswerCollector;

impl AnswerCollector {
    pub fn new() -> Self {
        Self
    }

    /// 为表单中的每个问题收集答案
    ///
    /// # 参数
    /// - `form`: 待填写的表单，答案原地写回 `questions[i].answer`
    /// - `console`: 提问与读取答案使用的控制台
    ///
    /// # 返回
    /// 返回作答统计；输入流结束时返回 `InputClosed`，已作答的题目保留答案
    pub fn collect<R: BufRead, W: Write>(
        &self,
        form: &mut Form,
        console: &mut Console<R, W>,
    ) -> FormResult<CollectSummary> {
        let mut summary = CollectSummary::default();

        for (index, question) in form.questions.iter_mut().enumerate() {
            self.present(index + 1, question, console)?;

            let mut answer = self.read_answer(console)?;
            while !question.accepts(&answer) {
                debug!(
                    "第 {} 题答案被拒绝: {:?} (题目: {})",
                    index + 1,
                    answer,
                    truncate_text(&question.text, 40)
                );
                summary.rejected += 1;
                console.say("Answer not possible, try again")?;
                answer = self.read_answer(console)?;
            }

            question.answer = Some(answer);
            summary.answered += 1;
        }

        info!(
            "表单 {} 作答完成: {} 题, 拒绝 {} 次",
            form.name, summary.answered, summary.rejected
        );
        Ok(summary)
    }

    fn present<R: BufRead, W: Write>(
        &self,
        number: usize,
        question: &Question,
        console: &mut Console<R, W>,
    ) -> FormResult<()> {
        console.say(format!("{}. {}", number, question.text))?;
        if question.has_options() {
            console.say(format!("Options: {}", question.options.join(", ")))?;
        }
        if question.required {
            console.say("This question is required.")?;
        }
        Ok(())
    }

    fn read_answer<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> FormResult<String> {
        console.prompt("Your answer: ")?;
        Ok(console.read_line()?.to_lowercase())
    }
}
