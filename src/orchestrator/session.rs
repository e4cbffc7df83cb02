//! 会话控制器
//!
//! 菜单状态机：MENU → IMPORTING / FILLING。当前表单作为 `SessionState` 随会话流转，
//! 不使用全局变量。

use std::io::{BufRead, Stdout, StdinLock, Write};

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{FormError, FormResult};
use crate::infrastructure::Console;
use crate::models::{load_form, Form};
use crate::utils::logging;
use crate::workflow::FillFlow;

/// 会话中的表单槽位
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NoForm,
    Imported(Form),
}

impl SessionState {
    pub fn form(&self) -> Option<&Form> {
        match self {
            SessionState::NoForm => None,
            SessionState::Imported(form) => Some(form),
        }
    }
}

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Import,
    Fill,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Import,
            "2" => MenuChoice::Fill,
            _ => MenuChoice::Invalid,
        }
    }
}

/// 状态机当前步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Menu,
    Importing,
    Filling,
    Done,
}

/// 应用主结构
pub struct App<R, W> {
    config: Config,
    console: Console<R, W>,
    state: SessionState,
    fill_flow: FillFlow,
}

impl App<StdinLock<'static>, Stdout> {
    /// 绑定标准输入输出
    pub fn stdio(config: Config) -> Self {
        Self::new(config, Console::stdio())
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: Config, console: Console<R, W>) -> Self {
        let fill_flow = FillFlow::new(&config);
        Self {
            config,
            console,
            state: SessionState::NoForm,
            fill_flow,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// 运行会话直到填表完成或输入结束
    pub async fn run(&mut self) -> FormResult<()> {
        logging::log_startup(&self.config);

        self.console.say("Welcome, choose an action:")?;

        let mut step = Step::Menu;
        while step != Step::Done {
            let next = match step {
                Step::Menu => self.menu().await,
                Step::Importing => self.import().await,
                Step::Filling => self.fill().await,
                Step::Done => Ok(Step::Done),
            };

            step = match next {
                Ok(next) => next,
                Err(FormError::InputClosed) => {
                    info!("输入流已关闭");
                    logging::log_session_end("输入结束");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
        }

        logging::log_session_end("填表完成");
        Ok(())
    }

    async fn menu(&mut self) -> FormResult<Step> {
        self.print_actions()?;

        match self.read_choice()? {
            MenuChoice::Import => Ok(Step::Importing),
            MenuChoice::Fill => match self.state {
                SessionState::Imported(_) => Ok(Step::Filling),
                SessionState::NoForm => {
                    self.console.say("First, a form must be imported")?;
                    Ok(Step::Menu)
                }
            },
            MenuChoice::Invalid => {
                self.console.say("Invalid option. please choose again")?;
                Ok(Step::Menu)
            }
        }
    }

    async fn import(&mut self) -> FormResult<Step> {
        self.console.say("Enter the path to the form:")?;
        let path = self.console.read_line()?;

        let form = match load_form(&path).await {
            Ok(form) => form,
            Err(e) => {
                warn!("导入表单失败 {}: {}", path, e);
                self.console.say(format!("Error importing form: {}", e))?;
                return Ok(Step::Menu);
            }
        };

        logging::log_form_imported(&form);
        self.state = SessionState::Imported(form);

        self.console.say("Form imported.")?;
        self.console.say("Choose an action:")?;
        self.print_actions()?;

        match self.read_choice()? {
            MenuChoice::Import => Ok(Step::Importing),
            MenuChoice::Fill => Ok(Step::Filling),
            MenuChoice::Invalid => {
                self.console.say("Invalid option. please choose again")?;
                Ok(Step::Menu)
            }
        }
    }

    async fn fill(&mut self) -> FormResult<Step> {
        let SessionState::Imported(form) = &mut self.state else {
            self.console.say("First, a form must be imported")?;
            return Ok(Step::Menu);
        };

        match self.fill_flow.run(form, &mut self.console).await {
            Ok(_) if self.config.exit_after_fill => Ok(Step::Done),
            Ok(_) => Ok(Step::Menu),
            Err(e) if e.is_console_failure() => Err(e),
            Err(e) => {
                error!("填表失败: {}", e);
                self.console.say(e)?;
                Ok(Step::Menu)
            }
        }
    }

    fn print_actions(&mut self) -> FormResult<()> {
        self.console.say("1. Import a form")?;
        self.console.say("2. Fill in a form")
    }

    fn read_choice(&mut self) -> FormResult<MenuChoice> {
        Ok(MenuChoice::parse(&self.console.read_line()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn app(input: &str) -> App<Cursor<String>, Vec<u8>> {
        App::new(
            Config::default(),
            Console::new(Cursor::new(input.to_string()), Vec::new()),
        )
    }

    fn output(app: &App<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(app.console().writer().clone()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Import);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::Fill);
        assert_eq!(MenuChoice::parse(" 1"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("2 "), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
    }

    #[tokio::test]
    async fn test_fill_without_import_returns_to_menu() {
        let mut app = app("2\n");

        app.run().await.unwrap();

        let output = output(&app);
        assert!(output.starts_with("Welcome, choose an action:\n1. Import a form\n2. Fill in a form\n"));
        assert!(output.contains("First, a form must be imported\n1. Import a form\n"));
        assert_eq!(app.state(), &SessionState::NoForm);
    }

    #[tokio::test]
    async fn test_invalid_option_returns_to_menu() {
        let mut app = app("9\n");

        app.run().await.unwrap();

        assert!(output(&app).contains("Invalid option. please choose again\n1. Import a form\n"));
    }

    #[tokio::test]
    async fn test_padded_choice_is_invalid() {
        let mut app = app(" 1\n");

        app.run().await.unwrap();

        let output = output(&app);
        assert!(output.contains("Invalid option. please choose again\n"));
        assert!(!output.contains("Enter the path to the form:"));
    }

    #[tokio::test]
    async fn test_import_path_is_used_verbatim() {
        let mut app = app("1\nform.json \n");

        app.run().await.unwrap();

        assert!(output(&app).contains("Error importing form: unsupported file format: form.json \n"));
    }

    #[tokio::test]
    async fn test_import_failure_returns_to_menu() {
        let mut app = app("1\nform.txt\n");

        app.run().await.unwrap();

        let output = output(&app);
        assert!(output.contains(
            "Enter the path to the form:\nError importing form: unsupported file format: form.txt\n1. Import a form\n"
        ));
        assert_eq!(app.state(), &SessionState::NoForm);
    }
}
