mod manager;
mod task;

pub(crate) use manager::{add_task, remove_by_ordinal};
pub use manager::{parse_ordinal, render_listing, render_menu};
pub use task::{ADDED_FORMAT, NO_DEADLINE, TaskRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_task(name: &str) -> TaskRecord {
        TaskRecord {
            task: name.to_string(),
            deadline: NO_DEADLINE.to_string(),
            added: "2025-01-01 09:00".to_string(),
        }
    }

    fn names(tasks: &[TaskRecord]) -> Vec<&str> {
        tasks.iter().map(|t| t.task.as_str()).collect()
    }

    #[test]
    fn test_new_task_defaults_deadline() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();

        let task = TaskRecord::new("Buy milk", None, at);
        assert_eq!(task.deadline, NO_DEADLINE);
        assert_eq!(task.added, "2025-03-14 15:09");

        let task = TaskRecord::new("Buy milk", Some("   "), at);
        assert_eq!(task.deadline, NO_DEADLINE);

        let task = TaskRecord::new("Buy milk", Some("2025-03-20 18:00"), at);
        assert_eq!(task.deadline, "2025-03-20 18:00");
    }

    #[test]
    fn test_remove_by_ordinal_keeps_order() {
        let mut tasks = vec![create_task("A"), create_task("B"), create_task("C")];

        let removed = remove_by_ordinal(&mut tasks, 2).unwrap();
        assert_eq!(removed.task, "B");
        assert_eq!(names(&tasks), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut tasks = vec![create_task("A"), create_task("B"), create_task("C")];

        assert!(remove_by_ordinal(&mut tasks, 5).is_none());
        assert!(remove_by_ordinal(&mut tasks, 0).is_none());
        assert_eq!(names(&tasks), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal(" 2 \n"), Some(2));
        assert_eq!(parse_ordinal("two"), None);
        assert_eq!(parse_ordinal("-1"), None);
        assert_eq!(parse_ordinal(""), None);
    }

    #[test]
    fn test_render_listing_and_menu() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, create_task("A"));
        add_task(&mut tasks, create_task("B"));

        assert_eq!(
            render_listing(&tasks),
            "- A (Deadline: No deadline, Added: 2025-01-01 09:00)\n\
             - B (Deadline: No deadline, Added: 2025-01-01 09:00)"
        );
        assert_eq!(render_menu(&tasks), "1. A\n2. B");
    }
}
