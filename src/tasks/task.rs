//! 任务记录

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// 未填写截止时间时使用的占位值
pub const NO_DEADLINE: &str = "No deadline";

/// `added` 字段的时间格式
pub const ADDED_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// 任务名称（允许为空字符串）
    pub task: String,
    /// 用户输入的截止时间原文，或 [`NO_DEADLINE`]
    pub deadline: String,
    /// 创建时间
    pub added: String,
}

impl TaskRecord {
    pub fn new<Tz>(name: impl Into<String>, deadline: Option<&str>, added: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let deadline = deadline
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DEADLINE);
        Self {
            task: name.into(),
            deadline: deadline.to_string(),
            added: added.format(ADDED_FORMAT).to_string(),
        }
    }
}
