use std::path::Path;

use crate::error::{GanttError, Result};
use crate::model::Task;

/// Export the whole tree as a flat, semicolon-delimited schedule.
///
/// Columns: Id ; Depth ; Name ; Start ; End ; Progress ; State ; Dependencies
/// Rows are in pre-order regardless of expansion state. Timestamps are
/// written as they were received. Returns the number of tasks written.
pub fn export_csv(root: &Task, path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| GanttError::io(path, e))?;
    let count = write_csv(root, file)?;
    tracing::info!(path = %path.display(), tasks = count, "exported schedule");
    Ok(count)
}

/// Write the flattened schedule to any writer.
pub fn write_csv<W: std::io::Write>(root: &Task, writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record([
        "Id",
        "Depth",
        "Name",
        "Start",
        "End",
        "Progress",
        "State",
        "Dependencies",
    ])?;

    let mut count = 0;
    let mut stack = vec![(root, 0usize)];
    while let Some((task, depth)) = stack.pop() {
        let depth_field = depth.to_string();
        let progress_field = task.percent().to_string();
        let deps_field = task.dependencies.join(",");
        wtr.write_record([
            task.id.as_str(),
            depth_field.as_str(),
            task.name.as_str(),
            task.start_time.as_deref().unwrap_or(""),
            task.end_time.as_deref().unwrap_or(""),
            progress_field.as_str(),
            task.job_state().label(),
            deps_field.as_str(),
        ])?;
        count += 1;
        stack.extend(task.children.iter().rev().map(|c| (c, depth + 1)));
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(count)
}
