//! 交互输入边界
//!
//! 业务逻辑只负责描述"需要什么输入"（[`HumanLoopRequest`]），
//! 由 [`HumanLoopProvider`] 负责真正去收集。

mod console;

use crate::error::Result;
use async_trait::async_trait;

pub use console::ConsoleHumanLoopProvider;

/// 一次需要用户补充的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanLoopRequest {
    /// 与输入同一行显示的提示语
    pub prompt: String,
    /// 提示语之前额外展示的内容（如删除任务时的编号列表）
    pub preamble: Option<String>,
}

impl HumanLoopRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            preamble: None,
        }
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }
}

#[async_trait]
pub trait HumanLoopProvider: Send + Sync {
    /// 返回用户输入的一行文本（不含换行符）；输入流结束时返回 `InputClosed`
    async fn request(&self, req: HumanLoopRequest) -> Result<String>;
}
