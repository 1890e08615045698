//! 手动记忆模式
//!
//! 每次交互都从磁盘重新读取文档，用户输入无条件追加到对话记录（包括命令本身），
//! 仅在任务增删成功或拿到模型回复后整体写回。`view tasks`、空列表提示和无效序号
//! 不会写回，因此这些输入对应的对话记录不会被保留。

use crate::chat::command::{Command, TaskCommand};
use crate::error::Result;
use crate::human_loop::HumanLoopProvider;
use crate::llm::LlmClient;
use crate::llm::types::Message;
use crate::memory::{MemoryDocument, MemoryStore};
use crate::tasks::{TaskRecord, add_task, parse_ordinal, remove_by_ordinal, render_listing};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{debug, info};

pub const NO_TASKS: &str = "⚠️ No tasks available.";
pub const NOTHING_TO_DELETE: &str = "⚠️ No tasks to delete.";
pub const INVALID_TASK_NUMBER: &str = "⚠️ Invalid task number.";

/// 任务命令的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub reply: String,
    /// 文档是否需要写回
    pub persist: bool,
}

impl CommandOutcome {
    fn persisted(reply: String) -> Self {
        Self {
            reply,
            persist: true,
        }
    }

    fn transient(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            persist: false,
        }
    }
}

/// 在内存文档上执行任务命令，不做任何 IO
///
/// `answer` 是 [`Command::input_request`] 对应的用户回答。
pub fn apply_task_command(
    doc: &mut MemoryDocument,
    command: TaskCommand,
    answer: Option<&str>,
    now: DateTime<Local>,
) -> CommandOutcome {
    match command {
        TaskCommand::Add { name } => {
            let reply = format!("✅ Task added: {name}");
            add_task(&mut doc.tasks, TaskRecord::new(name, answer, now));
            CommandOutcome::persisted(reply)
        }
        TaskCommand::View => {
            if doc.tasks.is_empty() {
                CommandOutcome::transient(NO_TASKS)
            } else {
                CommandOutcome::transient(format!("📝 Your tasks:\n{}", render_listing(&doc.tasks)))
            }
        }
        TaskCommand::Delete => {
            if doc.tasks.is_empty() {
                return CommandOutcome::transient(NOTHING_TO_DELETE);
            }
            match answer
                .and_then(parse_ordinal)
                .and_then(|n| remove_by_ordinal(&mut doc.tasks, n))
            {
                Some(removed) => CommandOutcome::persisted(format!("🗑️ Task deleted: {}", removed.task)),
                None => CommandOutcome::transient(INVALID_TASK_NUMBER),
            }
        }
    }
}

/// 手动记忆模式的命令解释器
pub struct ManualMemoryChat {
    llm: Arc<dyn LlmClient>,
    store: Arc<dyn MemoryStore>,
    input: Arc<dyn HumanLoopProvider>,
}

impl ManualMemoryChat {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        store: Arc<dyn MemoryStore>,
        input: Arc<dyn HumanLoopProvider>,
    ) -> Self {
        Self { llm, store, input }
    }

    pub async fn handle(&self, user_input: &str) -> Result<String> {
        let mut doc = self.store.load().await?;
        doc.conversation.push(Message::user(user_input));

        let command = Command::parse(user_input);
        let answer = match command.input_request(&doc) {
            Some(req) => Some(self.input.request(req).await?),
            None => None,
        };

        match command {
            Command::Task(task_command) => {
                debug!(command = ?task_command, "Task command");
                let outcome =
                    apply_task_command(&mut doc, task_command, answer.as_deref(), Local::now());
                if outcome.persist {
                    self.store.save(&doc).await?;
                    info!(tasks = doc.tasks.len(), "Task list updated");
                }
                Ok(outcome.reply)
            }
            Command::Chat => {
                let reply = self.llm.complete(doc.conversation.clone()).await?;
                doc.conversation.push(Message::assistant(reply.clone()));
                self.store.save(&doc).await?;
                debug!(messages = doc.conversation.len(), "Conversation saved");
                Ok(reply)
            }
        }
    }
}
