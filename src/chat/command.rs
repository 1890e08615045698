//! 手动记忆模式下的命令识别
//!
//! 只比较前缀，且只对前缀忽略大小写；剩余部分原样保留后去掉首尾空白。

use crate::human_loop::HumanLoopRequest;
use crate::memory::MemoryDocument;
use crate::tasks::render_menu;

const ADD_TASK: &str = "add task";
const VIEW_TASKS: &str = "view tasks";
const DELETE_TASK: &str = "delete task";

pub const DEADLINE_PROMPT: &str = "Enter deadline (YYYY-MM-DD HH:MM) or press Enter to skip: ";
pub const DELETE_PROMPT: &str = "Enter task number to delete: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// `add task <name>`，name 可以为空
    Add { name: String },
    View,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Task(TaskCommand),
    /// 非命令输入，转发给补全服务
    Chat,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        if let Some(rest) = strip_prefix_ignore_case(input, ADD_TASK) {
            Command::Task(TaskCommand::Add {
                name: rest.trim().to_string(),
            })
        } else if strip_prefix_ignore_case(input, VIEW_TASKS).is_some() {
            Command::Task(TaskCommand::View)
        } else if strip_prefix_ignore_case(input, DELETE_TASK).is_some() {
            Command::Task(TaskCommand::Delete)
        } else {
            Command::Chat
        }
    }

    /// 执行该命令前还需要向用户收集的输入；不需要时返回 `None`
    pub fn input_request(&self, doc: &MemoryDocument) -> Option<HumanLoopRequest> {
        match self {
            Command::Task(TaskCommand::Add { .. }) => Some(HumanLoopRequest::new(DEADLINE_PROMPT)),
            Command::Task(TaskCommand::Delete) if !doc.tasks.is_empty() => {
                Some(HumanLoopRequest::new(DELETE_PROMPT).with_preamble(render_menu(&doc.tasks)))
            }
            _ => None,
        }
    }
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &input[prefix.len()..])
}
