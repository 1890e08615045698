pub mod config;
pub mod types;

use crate::error::{ConfigError, LlmError, MemoryMapError, Result};
use crate::llm::config::ModelConfig;
use crate::llm::types::{ChatCompletionRequest, ChatCompletionResponse, Message};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tracing::debug;

pub fn assemble_req_header(model: &ModelConfig) -> Result<HeaderMap> {
    let apikey = model.apikey.as_deref().ok_or(ConfigError::MissingApiKey)?;
    let mut header_map = HeaderMap::new();

    header_map.insert(
        "Authorization",
        format!("Bearer {}", apikey)
            .parse()
            .map_err(|e| MemoryMapError::Other(format!("Invalid Authorization header: {}", e)))?,
    );
    header_map.insert(
        "Content-Type",
        "application/json"
            .parse()
            .map_err(|e| MemoryMapError::Other(format!("Invalid Content-Type header: {}", e)))?,
    );
    Ok(header_map)
}

/// 补全服务：给定有序的角色消息列表，返回模型生成的一段文本
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: Vec<Message>) -> Result<String>;
}

/// OpenAI 兼容 `/chat/completions` 接口的实现
///
/// 不设超时也不重试，失败直接返回给调用方。
pub struct OpenAiClient {
    client: Arc<Client>,
    model: ModelConfig,
}

impl OpenAiClient {
    pub fn new(client: Arc<Client>, model: ModelConfig) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        let header_map = assemble_req_header(&self.model)?;
        let request_body = ChatCompletionRequest {
            model: self.model.model.clone(),
            messages,
            temperature: self.model.temperature,
        };
        debug!(
            url = %self.model.baseurl,
            model = %request_body.model,
            messages = request_body.messages.len(),
            "🤖 Completion request"
        );

        let response = self
            .client
            .post(&self.model.baseurl)
            .headers(header_map)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;
        debug!(id = ?completion.id, usage = ?completion.usage, "Completion response");

        completion
            .first_content()
            .ok_or_else(|| LlmError::EmptyResponse.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn http() -> Arc<Client> {
        Arc::new(Client::builder().no_proxy().build().unwrap())
    }

    fn model(baseurl: &str, apikey: Option<&str>) -> ModelConfig {
        ModelConfig {
            model: "gpt-4o-mini".to_string(),
            baseurl: baseurl.to_string(),
            apikey: apikey.map(String::from),
            temperature: None,
        }
    }

    /// 本地单次 HTTP 服务：返回固定响应，并把收到的请求体发回测试
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let request_body = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break String::new();
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + content_length {
                        break text[end + 4..].to_string();
                    }
                }
            };
            let _ = tx.send(request_body);

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}/v1/chat/completions"), rx)
    }

    #[test]
    fn test_header_carries_bearer_token() {
        let headers = assemble_req_header(&model("http://unused", Some("sk-test"))).unwrap();
        assert_eq!(headers["Authorization"], "Bearer sk-test");
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_at_call_time() {
        let client = OpenAiClient::new(
            http(),
            model("http://127.0.0.1:9/v1/chat/completions", None),
        );

        let err = client
            .complete(vec![Message::user("hello")])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MemoryMapError::Config(ConfigError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"id":"c1","choices":[{"message":{"role":"assistant","content":"Hi Sam"}}]}"#,
        )
        .await;
        let client = OpenAiClient::new(http(), model(&url, Some("sk-test")));

        let reply = client
            .complete(vec![Message::user("I'm Sam")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi Sam");

        let sent: serde_json::Value = serde_json::from_str(&request.await.unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "I'm Sam"}]
            })
        );
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_api_error() {
        let (url, _request) = serve_once("401 Unauthorized", r#"{"error":"bad key"}"#).await;
        let client = OpenAiClient::new(http(), model(&url, Some("sk-bad")));

        let err = client.complete(vec![Message::user("hi")]).await.unwrap_err();
        match err {
            MemoryMapError::Llm(LlmError::ApiError { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("bad key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_response() {
        let (url, _request) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let client = OpenAiClient::new(http(), model(&url, Some("sk-test")));

        let err = client.complete(vec![Message::user("hi")]).await.unwrap_err();
        assert!(matches!(err, MemoryMapError::Llm(LlmError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_invalid_response() {
        let (url, _request) = serve_once("200 OK", "not json").await;
        let client = OpenAiClient::new(http(), model(&url, Some("sk-test")));

        let err = client.complete(vec![Message::user("hi")]).await.unwrap_err();
        assert!(matches!(
            err,
            MemoryMapError::Llm(LlmError::InvalidResponse(_))
        ));
    }
}
