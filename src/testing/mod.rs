//! 测试基础设施
//!
//! 在不依赖真实 LLM 和终端的情况下测试各组件。
//!
//! | 类型 | 用途 |
//! |------|------|
//! | [`MockLlmClient`] | 替代真实补全服务，记录每次收到的 messages |
//! | [`ScriptedHumanLoopProvider`] | 替代终端输入，按顺序返回预设的回答 |
//!
//! ```rust
//! use memorymap::chat::ManualMemoryChat;
//! use memorymap::memory::{InMemoryMemoryStore, MemoryStore};
//! use memorymap::testing::{MockLlmClient, ScriptedHumanLoopProvider};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = Arc::new(InMemoryMemoryStore::new());
//! let chat = ManualMemoryChat::new(
//!     Arc::new(MockLlmClient::new()),
//!     store.clone(),
//!     Arc::new(ScriptedHumanLoopProvider::new(["2025-06-01 10:00"])),
//! );
//!
//! let reply = chat.handle("add task Buy milk").await.unwrap();
//! assert_eq!(reply, "✅ Task added: Buy milk");
//! assert_eq!(store.load().await.unwrap().tasks.len(), 1);
//! # }
//! ```

mod mock_input;
mod mock_llm;

pub use mock_input::ScriptedHumanLoopProvider;
pub use mock_llm::MockLlmClient;
