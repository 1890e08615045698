use serde::{Deserialize, Serialize};

/// 单个模型的连接配置
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelConfig {
    /// LLM 接口中使用的模型名（如 `gpt-4o-mini`）
    pub model: String,
    /// Chat Completions 接口完整 URL
    pub baseurl: String,
    /// 启动时可以缺省，首次调用时才报错
    pub apikey: Option<String>,
    pub temperature: Option<f32>,
}
