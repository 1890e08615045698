pub mod chat;
pub mod config;
pub mod error;
pub mod human_loop;
pub mod llm;
pub mod memory;
pub mod tasks;
pub mod testing;

pub mod prelude {
    pub use crate::chat::{ChatMode, ManualMemoryChat, Session};
    pub use crate::config::{AppConfig, Cli};
    pub use crate::error::Result;
    pub use crate::human_loop::{ConsoleHumanLoopProvider, HumanLoopProvider};
    pub use crate::llm::{LlmClient, OpenAiClient};
    pub use crate::memory::{FileMemoryStore, MemoryStore};
}
