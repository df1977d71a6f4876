use super::task::Task;

/// One row of the chart as it will be drawn.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub task: &'a Task,
    pub depth: usize,
}

impl VisibleRow<'_> {
    pub fn id(&self) -> &str {
        &self.task.id
    }
}

/// Flatten the tree into the rows currently on screen, pre-order. Children
/// of a collapsed task are skipped together with their whole subtree.
pub fn visible_rows(root: &Task) -> Vec<VisibleRow<'_>> {
    let mut rows = Vec::new();
    push_rows(root, 0, &mut rows);
    rows
}

fn push_rows<'a>(task: &'a Task, depth: usize, rows: &mut Vec<VisibleRow<'a>>) {
    rows.push(VisibleRow { task, depth });
    if task.has_children() && task.is_expanded() {
        for child in &task.children {
            push_rows(child, depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Task {
        Task::new("r", "R").with_children(vec![
            Task::new("a", "A").with_children(vec![
                Task::new("a1", "A1"),
                Task::new("a2", "A2").with_children(vec![Task::new("a2x", "A2x")]),
            ]),
            Task::new("b", "B"),
        ])
    }

    fn ids(root: &Task) -> Vec<(String, usize)> {
        visible_rows(root)
            .iter()
            .map(|r| (r.id().to_string(), r.depth))
            .collect()
    }

    #[test]
    fn expanded_by_default() {
        let root = tree();
        assert_eq!(
            ids(&root),
            vec![
                ("r".to_string(), 0),
                ("a".to_string(), 1),
                ("a1".to_string(), 2),
                ("a2".to_string(), 2),
                ("a2x".to_string(), 3),
                ("b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn collapsing_hides_whole_subtree_only() {
        let mut root = tree();
        root.toggle_expanded("a");
        let rows: Vec<String> = ids(&root).into_iter().map(|(id, _)| id).collect();
        assert_eq!(rows, ["r", "a", "b"]);

        root.toggle_expanded("a");
        root.toggle_expanded("a2");
        let rows: Vec<String> = ids(&root).into_iter().map(|(id, _)| id).collect();
        assert_eq!(rows, ["r", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn collapsed_root_shows_one_row() {
        let mut root = tree();
        root.is_expanded = Some(false);
        assert_eq!(visible_rows(&root).len(), 1);
    }
}
