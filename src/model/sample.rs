use super::task::{Task, TaskStatus};

/// Demo ETL run used when no file has been opened.
pub fn sample_tree() -> Task {
    Task::new("1234", "ETL_MAIN_SOME_BIG_NAME_XXXXXXX_EXRA")
        .with_times("2025/04/29 10:52:29.000 +0000", "2025/04/29 12:49:46.000 +0000")
        .with_progress(100)
        .with_status(TaskStatus::Success)
        .with_dependencies(["jkl", "def"])
        .with_children(vec![
            Task::new("abc", "ETL_DATA")
                .with_times("2025/04/29 12:49:30.000 +0000", "2025/04/29 12:49:46.000 +0000")
                .with_progress(100)
                .with_status(TaskStatus::Success),
            Task::new("xyz", "ETL_DATA_TRANSFORM")
                .with_times("2025/04/29 12:48:37.000 +0000", "2025/04/29 12:49:00.000 +0000")
                .with_progress(100)
                .with_status(TaskStatus::Success),
            Task::new("def", "ETL_LOAD")
                .with_times("2025/04/29 11:30:00.000 +0000", "2025/04/29 12:10:00.000 +0000")
                .with_progress(80)
                .with_status(TaskStatus::InProgress),
            Task::new("ghi", "ETL_VALIDATE")
                .with_times("2025/04/29 11:00:00.000 +0000", "2025/04/29 12:00:00.000 +0000")
                .with_progress(50)
                .with_status(TaskStatus::InProgress),
            Task::new("jkl", "ETL_EXPORT")
                .with_times("2025/04/29 12:20:00.000 +0000", "2025/04/30 07:49:30.000 +0000")
                .with_status(TaskStatus::NotStarted),
        ])
}
