//! 手动记忆存储
//!
//! 整个存储就是一个 JSON 文档：
//!
//! ```json
//! {
//!     "conversation": [ { "role": "user", "content": "..." } ],
//!     "tasks": [ { "task": "...", "deadline": "No deadline", "added": "2025-01-01 09:00" } ]
//! }
//! ```
//!
//! 每次手动记忆交互开始时从磁盘重新读取，发生变更后整体写回。
//!
//! | 类型 | 说明 |
//! |------|------|
//! | [`FileMemoryStore`] | JSON 文件持久化 |
//! | [`InMemoryMemoryStore`] | 进程内存，适合测试 |

pub mod store;

pub use store::{FileMemoryStore, InMemoryMemoryStore, MemoryDocument, MemoryStore};
