use std::path::Path;

use crate::error::{GanttError, Result};
use crate::model::{Task, TaskIndex};

/// Load a job tree from a JSON file holding one root task.
///
/// Rejects trees with duplicate ids. Dependencies on ids that do not exist
/// are kept and logged; they are simply never drawn.
pub fn load_tree(path: &Path) -> Result<Task> {
    let json = std::fs::read_to_string(path).map_err(|e| GanttError::io(path, e))?;
    let root = parse_tree(&json)?;
    tracing::info!(path = %path.display(), tasks = root.count(), "loaded task tree");
    Ok(root)
}

/// Parse and validate a job tree from JSON text.
pub fn parse_tree(json: &str) -> Result<Task> {
    let root: Task = serde_json::from_str(json)?;
    let index = TaskIndex::build(&root)?;
    for (task, dep) in index.dangling_dependencies() {
        tracing::warn!(task, dependency = dep, "dependency refers to an unknown task");
    }
    Ok(root)
}

/// Save a job tree, including expansion state, to a JSON file.
pub fn save_tree(root: &Task, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(root)?;
    std::fs::write(path, json).map_err(|e| GanttError::io(path, e))?;
    tracing::info!(path = %path.display(), "saved task tree");
    Ok(())
}
