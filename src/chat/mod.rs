//! 三种记忆策略与交互主循环
//!
//! | 模式 | 实现 | 记忆 |
//! |------|------|------|
//! | `1` 无记忆 | [`stateless_chat`] | 无 |
//! | `2` 手动记忆 | [`ManualMemoryChat`] | JSON 文件（对话 + 任务） |
//! | `3` 框架记忆 | [`framework_memory_chat`] | 未实现 |

pub mod command;
mod framework;
pub mod manual;
pub mod mode;
pub mod session;
mod stateless;

pub use command::{Command, TaskCommand};
pub use framework::framework_memory_chat;
pub use manual::{CommandOutcome, ManualMemoryChat, apply_task_command};
pub use mode::{ChatMode, ModeSelection};
pub use session::Session;
pub use stateless::stateless_chat;
