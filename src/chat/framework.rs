/// 第三方记忆框架模式尚未接入：不调用补全服务，也不积累任何记忆
pub fn framework_memory_chat(user_input: &str) -> String {
    format!("[Framework memory mode not implemented] You said: {user_input}")
}
