//! 可脚本化的输入 Provider，替代 stdin。

use crate::error::{MemoryMapError, Result};
use crate::human_loop::{HumanLoopProvider, HumanLoopRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// 按顺序返回预设回答；队列耗尽后返回 `InputClosed`（等同于 stdin EOF）。
pub struct ScriptedHumanLoopProvider {
    answers: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<HumanLoopRequest>>>,
}

impl Default for ScriptedHumanLoopProvider {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl ScriptedHumanLoopProvider {
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 已收到的全部请求（按时序排列）
    pub fn requests(&self) -> Vec<HumanLoopRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 剩余未消费的回答数量
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

#[async_trait]
impl HumanLoopProvider for ScriptedHumanLoopProvider {
    async fn request(&self, req: HumanLoopRequest) -> Result<String> {
        self.requests.lock().unwrap().push(req);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(MemoryMapError::InputClosed)
    }
}
