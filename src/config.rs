//! 应用配置
//!
//! 优先级（高 → 低）：命令行参数 > 环境变量 > YAML 配置文件 > 内置默认值。
//!
//! ```yaml
//! model:
//!   model: gpt-4o-mini
//!   baseurl: https://api.openai.com/v1/chat/completions
//!   apikey: sk-...
//!   temperature: 0.7
//! memory_file: ~/.memorymap/manual_memory.json
//! ```

use crate::error::{ConfigError, Result};
use crate::llm::config::ModelConfig;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MEMORY_FILE: &str = "manual_memory.json";

/// 命令行参数（每个参数都可由对应环境变量提供）
#[derive(Debug, Default, Parser)]
#[command(name = "memorymap", version, about = "Explore conversational memory strategies")]
pub struct Cli {
    /// YAML 配置文件路径
    #[arg(long, env = "MEMORYMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// 模型名称
    #[arg(long, env = "MEMORYMAP_MODEL")]
    pub model: Option<String>,

    /// Chat Completions 接口完整 URL
    #[arg(long, env = "MEMORYMAP_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// 采样温度（不设置则不发送）
    #[arg(long, env = "MEMORYMAP_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// 手动记忆模式的 JSON 存储文件
    #[arg(long, env = "MEMORYMAP_MEMORY_FILE")]
    pub memory_file: Option<PathBuf>,
}

/// YAML 文件中的模型段
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ModelSection {
    pub model: Option<String>,
    pub baseurl: Option<String>,
    pub apikey: Option<String>,
    pub temperature: Option<f32>,
}

/// YAML 配置文件，所有字段均可省略
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub model: ModelSection,
    pub memory_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        let config: FileConfig = serde_yaml::from_reader(file)?;
        Ok(config)
    }
}

/// 合并后的最终配置，在 `main` 中构造一次后显式传递给各组件
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub memory_file: PathBuf,
}

impl AppConfig {
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: Cli, file: FileConfig) -> Result<Self> {
        let temperature = cli.temperature.or(file.model.temperature);
        if let Some(t) = temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(ConfigError::InvalidValue {
                field: "temperature".to_string(),
                message: format!("{t} is outside 0.0..=2.0"),
            }
            .into());
        }

        let model = ModelConfig {
            model: cli
                .model
                .or(file.model.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            baseurl: cli
                .base_url
                .or(file.model.baseurl)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            apikey: cli
                .api_key
                .or(file.model.apikey)
                .filter(|k| !k.trim().is_empty()),
            temperature,
        };

        let memory_file = cli
            .memory_file
            .or(file.memory_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEMORY_FILE));

        Ok(Self {
            model,
            memory_file: expand_tilde(&memory_file),
        })
    }
}

pub(crate) fn expand_tilde(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    if s.starts_with("~/")
        && let Some(home) = std::env::var("HOME")
            .ok()
            .or_else(|| std::env::var("USERPROFILE").ok())
    {
        return PathBuf::from(home).join(&s[2..]);
    }
    path.to_path_buf()
}
