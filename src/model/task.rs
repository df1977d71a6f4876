use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::timestamp::parse_timestamp;

/// Status reported by the scheduler for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Success,
    #[serde(rename = "In-Progress")]
    InProgress,
    #[serde(rename = "Not-Started")]
    NotStarted,
    Failed,
}

impl TaskStatus {
    fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            "Success" => Some(Self::Success),
            "In-Progress" => Some(Self::InProgress),
            "Not-Started" => Some(Self::NotStarted),
            "Failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// State a bar is drawn in. Explicit status wins, otherwise it is derived
/// from the dates and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobState {
    NotStarted,
    InProgress,
    Success,
    Failed,
}

impl JobState {
    pub fn label(self) -> &'static str {
        match self {
            JobState::NotStarted => "Not-started",
            JobState::InProgress => "In-progress",
            JobState::Success => "Success",
            JobState::Failed => "Failed",
        }
    }
}

impl From<TaskStatus> for JobState {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Success => JobState::Success,
            TaskStatus::InProgress => JobState::InProgress,
            TaskStatus::NotStarted => JobState::NotStarted,
            TaskStatus::Failed => JobState::Failed,
        }
    }
}

/// A node in the job tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// Percent complete, 0 to 100.
    #[serde(default)]
    pub progress: u8,
    #[serde(
        default,
        deserialize_with = "lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<TaskStatus>,
    /// Ids of tasks this one depends on. Weak references, resolved through
    /// [`super::TaskIndex`].
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub children: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}

/// Unknown status strings are dropped so the state falls back to progress.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<TaskStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TaskStatus::from_wire))
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time: None,
            end_time: None,
            progress: 0,
            status: None,
            dependencies: Vec::new(),
            children: Vec::new(),
            is_expanded: None,
        }
    }

    pub fn with_times(mut self, start: &str, end: &str) -> Self {
        self.start_time = Some(start.to_string());
        self.end_time = Some(end.to_string());
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_children(mut self, children: Vec<Task>) -> Self {
        self.children = children;
        self
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start_time.as_deref().and_then(parse_timestamp)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end_time.as_deref().and_then(parse_timestamp)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Unset means expanded.
    pub fn is_expanded(&self) -> bool {
        self.is_expanded != Some(false)
    }

    /// Progress clamped to 100.
    pub fn percent(&self) -> u8 {
        self.progress.min(100)
    }

    pub fn job_state(&self) -> JobState {
        if let Some(status) = self.status {
            return status.into();
        }
        if self.start_time.is_none() {
            return JobState::NotStarted;
        }
        match self.percent() {
            100 => JobState::Success,
            p if p > 0 => JobState::InProgress,
            _ => JobState::NotStarted,
        }
    }

    /// True when the direct children disagree on their state.
    pub fn has_mixed_child_status(&self) -> bool {
        let states: HashSet<JobState> = self.children.iter().map(Task::job_state).collect();
        states.len() > 1
    }

    /// Flip the expansion flag of the task with `id`. Only tasks with
    /// children can be toggled. Returns whether anything changed.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(task) if task.has_children() => {
                task.is_expanded = Some(!task.is_expanded());
                true
            }
            _ => false,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Pre-order iterator over this task and all descendants.
    pub fn iter(&self) -> TaskIter<'_> {
        TaskIter { stack: vec![self] }
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

pub struct TaskIter<'a> {
    stack: Vec<&'a Task>,
}

impl<'a> Iterator for TaskIter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let task = self.stack.pop()?;
        self.stack.extend(task.children.iter().rev());
        Some(task)
    }
}
