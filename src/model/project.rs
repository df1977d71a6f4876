use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::task::Task;
use crate::error::{GanttError, Result};

/// A loaded job tree plus the metadata the host shows around it.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub root: Task,
    pub loaded: DateTime<Utc>,
    /// Bumped on every structural change so views know to rebuild caches.
    pub revision: u64,
}

impl Project {
    pub fn new(name: impl Into<String>, root: Task) -> Self {
        Self {
            name: name.into(),
            root,
            loaded: Utc::now(),
            revision: 0,
        }
    }

    /// Touch the revision counter.
    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        let changed = self.root.toggle_expanded(id);
        if changed {
            self.touch();
        }
        changed
    }
}

/// Flat id lookup over one snapshot of the tree.
#[derive(Debug)]
pub struct TaskIndex<'a> {
    by_id: HashMap<&'a str, &'a Task>,
}

impl<'a> TaskIndex<'a> {
    /// Build the index. Fails on the first repeated id.
    pub fn build(root: &'a Task) -> Result<Self> {
        let mut by_id = HashMap::new();
        for task in root.iter() {
            if by_id.insert(task.id.as_str(), task).is_some() {
                return Err(GanttError::DuplicateTaskId(task.id.clone()));
            }
        }
        Ok(Self { by_id })
    }

    pub fn get(&self, id: &str) -> Option<&'a Task> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Dependency ids that do not resolve to any task.
    pub fn dangling_dependencies(&self) -> Vec<(&'a str, &'a str)> {
        let mut out: Vec<(&str, &str)> = self
            .by_id
            .values()
            .flat_map(|task| {
                task.dependencies
                    .iter()
                    .filter(|dep| !self.by_id.contains_key(dep.as_str()))
                    .map(move |dep| (task.id.as_str(), dep.as_str()))
            })
            .collect();
        out.sort_unstable();
        out
    }
}
