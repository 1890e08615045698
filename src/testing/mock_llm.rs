//! 补全服务的替身：按脚本回复，并记录每次收到的完整 messages。
//!
//! ```rust
//! use memorymap::testing::MockLlmClient;
//! use memorymap::llm::LlmClient;
//! use memorymap::llm::types::Message;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockLlmClient::new().with_responses(["你好", "再见"]);
//!
//! assert_eq!(mock.complete(vec![Message::user("hi")]).await.unwrap(), "你好");
//! assert_eq!(mock.calls(), vec![vec![Message::user("hi")]]);
//! # }
//! ```

use crate::error::{LlmError, MemoryMapError, Result};
use crate::llm::LlmClient;
use crate::llm::types::Message;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 脚本耗尽后返回 `EmptyResponse`
#[derive(Default)]
pub struct MockLlmClient {
    script: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, texts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.script
            .lock()
            .unwrap()
            .extend(texts.into_iter().map(|t| Ok(t.into())));
        self
    }

    /// 下一次调用以网络错误失败
    pub fn with_network_error(self, msg: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(MemoryMapError::Llm(LlmError::NetworkError(msg.into()))));
        self
    }

    /// 每次调用收到的 messages，按时序排列
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        self.calls.lock().unwrap().push(messages);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(MemoryMapError::Llm(LlmError::EmptyResponse)))
    }
}
