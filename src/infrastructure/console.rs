//! 控制台 - 基础设施层
//!
//! 持有唯一的输入/输出流，只暴露"读一行 / 写一行"的能力

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::error::{FormError, FormResult};

/// 交互式控制台
///
/// 职责：
/// - 持有输入流和输出流
/// - 不认识 Form / Question
/// - 输入结束时返回 `FormError::InputClosed`
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// 绑定标准输入输出
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 输出一行
    pub fn say(&mut self, line: impl Display) -> FormResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// 输出提示（不换行）
    pub fn prompt(&mut self, text: &str) -> FormResult<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// 读取一行，去掉行尾换行符
    pub fn read_line(&mut self) -> FormResult<String> {
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FormError::InputClosed);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
