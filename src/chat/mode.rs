//! 模式选择

/// 三种记忆策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// 无记忆：每次只发送当前输入
    Stateless,
    /// 手动记忆：对话和任务持久化到 JSON 文件
    ManualMemory,
    /// 第三方记忆框架，尚未实现
    FrameworkMemory,
}

impl ChatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatMode::Stateless => "stateless",
            ChatMode::ManualMemory => "manual-memory",
            ChatMode::FrameworkMemory => "framework-memory",
        }
    }
}

/// 模式提示符处用户的一次选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSelection {
    Mode(ChatMode),
    Exit,
    Invalid(String),
}

impl ModeSelection {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => ModeSelection::Mode(ChatMode::Stateless),
            "2" => ModeSelection::Mode(ChatMode::ManualMemory),
            "3" => ModeSelection::Mode(ChatMode::FrameworkMemory),
            s if s.eq_ignore_ascii_case("exit") => ModeSelection::Exit,
            s => ModeSelection::Invalid(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(ModeSelection::parse("1"), ModeSelection::Mode(ChatMode::Stateless));
        assert_eq!(ModeSelection::parse(" 2 "), ModeSelection::Mode(ChatMode::ManualMemory));
        assert_eq!(ModeSelection::parse("3"), ModeSelection::Mode(ChatMode::FrameworkMemory));
        assert_eq!(ModeSelection::parse("exit"), ModeSelection::Exit);
        assert_eq!(ModeSelection::parse("EXIT"), ModeSelection::Exit);
        assert_eq!(ModeSelection::parse("4"), ModeSelection::Invalid("4".to_string()));
        assert_eq!(ModeSelection::parse(""), ModeSelection::Invalid(String::new()));
    }
}
