use crate::error::Result;
use crate::llm::LlmClient;
use crate::llm::types::Message;

/// 无记忆对话：只发送当前这一条输入，不读写任何存储
pub async fn stateless_chat(llm: &dyn LlmClient, user_input: &str) -> Result<String> {
    llm.complete(vec![Message::user(user_input)]).await
}
