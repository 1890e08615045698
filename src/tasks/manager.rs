//! 有序任务列表的操作
//!
//! 序号（ordinal）从 1 开始，只用于展示和删除，不是持久化的身份标识。

use crate::tasks::task::TaskRecord;

pub(crate) fn add_task(tasks: &mut Vec<TaskRecord>, task: TaskRecord) {
    tasks.push(task);
}

/// 按 1 起始的序号删除任务，越界返回 `None` 且不修改列表
pub(crate) fn remove_by_ordinal(tasks: &mut Vec<TaskRecord>, ordinal: usize) -> Option<TaskRecord> {
    if (1..=tasks.len()).contains(&ordinal) {
        Some(tasks.remove(ordinal - 1))
    } else {
        None
    }
}

/// 解析用户输入的序号；非数字输入返回 `None`
pub fn parse_ordinal(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// "view tasks" 的列表内容，每行一个任务
pub fn render_listing(tasks: &[TaskRecord]) -> String {
    tasks
        .iter()
        .map(|t| format!("- {} (Deadline: {}, Added: {})", t.task, t.deadline, t.added))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 删除前展示的编号菜单
pub fn render_menu(tasks: &[TaskRecord]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t.task))
        .collect::<Vec<_>>()
        .join("\n")
}
