//! 交互主循环
//!
//! 状态只有两个：等待选择模式（初始状态，每次回复后回到这里）和已退出。

use crate::chat::framework::framework_memory_chat;
use crate::chat::manual::ManualMemoryChat;
use crate::chat::mode::{ChatMode, ModeSelection};
use crate::chat::stateless::stateless_chat;
use crate::error::{MemoryMapError, Result};
use crate::human_loop::{HumanLoopProvider, HumanLoopRequest};
use crate::llm::LlmClient;
use crate::memory::MemoryStore;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

pub const MODE_PROMPT: &str = "Choose mode (1-3) or 'exit' to quit: ";
pub const INPUT_PROMPT: &str = "You: ";
pub const INVALID_MODE: &str = "⚠️ Invalid mode. Choose 1, 2, or 3.";
pub const FAREWELL: &str = "👋 Goodbye! Memory saved.";

const BANNER: &str = "👋 Welcome to MemoryMap. Explore conversational memory with a hosted LLM";
const MODES: &str = "Modes: \n1. Stateless \n2. Manual Memory \n3. Framework Memory (not implemented)\n";

pub struct Session {
    llm: Arc<dyn LlmClient>,
    manual: ManualMemoryChat,
    input: Arc<dyn HumanLoopProvider>,
}

impl Session {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        store: Arc<dyn MemoryStore>,
        input: Arc<dyn HumanLoopProvider>,
    ) -> Self {
        let manual = ManualMemoryChat::new(llm.clone(), store, input.clone());
        Self { llm, manual, input }
    }

    /// 按模式处理一次用户输入
    pub async fn dispatch(&self, mode: ChatMode, user_input: &str) -> Result<String> {
        debug!(mode = mode.as_str(), "Dispatch");
        match mode {
            ChatMode::Stateless => stateless_chat(self.llm.as_ref(), user_input).await,
            ChatMode::ManualMemory => self.manual.handle(user_input).await,
            ChatMode::FrameworkMemory => Ok(framework_memory_chat(user_input)),
        }
    }

    /// 运行交互循环，直到用户输入 `exit` 或输入流结束
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{MODES}")?;
        out.flush()?;
        info!("Session started");

        loop {
            let raw = match self.input.request(HumanLoopRequest::new(MODE_PROMPT)).await {
                Ok(raw) => raw,
                Err(MemoryMapError::InputClosed) => {
                    writeln!(out)?;
                    writeln!(out, "{FAREWELL}")?;
                    break;
                }
                Err(e) => return Err(e),
            };

            let mode = match ModeSelection::parse(&raw) {
                ModeSelection::Exit => {
                    writeln!(out, "{FAREWELL}")?;
                    break;
                }
                ModeSelection::Mode(mode) => Some(mode),
                ModeSelection::Invalid(selector) => {
                    debug!(selector = %selector, "Invalid mode selector");
                    None
                }
            };

            // 模式无效时同样先读取一行输入，再给出提示
            let user_input = self.input.request(HumanLoopRequest::new(INPUT_PROMPT)).await?;
            let reply = match mode {
                Some(mode) => self.dispatch(mode, &user_input).await?,
                None => INVALID_MODE.to_string(),
            };

            writeln!(out, "AI: {reply}")?;
            out.flush()?;
        }

        info!("Session ended");
        Ok(())
    }
}
