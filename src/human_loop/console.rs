use std::io::Write as _;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

use super::{HumanLoopProvider, HumanLoopRequest};
use crate::error::{MemoryMapError, Result};

/// 基于命令行 stdin 的输入 Provider（异步，不阻塞 tokio 工作线程）。
pub struct ConsoleHumanLoopProvider {
    reader: Mutex<BufReader<Stdin>>,
}

impl Default for ConsoleHumanLoopProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleHumanLoopProvider {
    pub fn new() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

#[async_trait]
impl HumanLoopProvider for ConsoleHumanLoopProvider {
    async fn request(&self, req: HumanLoopRequest) -> Result<String> {
        if let Some(preamble) = &req.preamble {
            println!("{preamble}");
        }
        print!("{}", req.prompt);
        let _ = std::io::stdout().flush();

        let mut buf = String::new();
        let n = self.reader.lock().await.read_line(&mut buf).await?;
        if n == 0 {
            return Err(MemoryMapError::InputClosed);
        }
        Ok(strip_line_ending(buf))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
