//! Directory tree listing of a freshly generated project.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use gosprout_core::{
    application::ApplicationError,
    domain::PlannedLayout,
    error::GosproutResult,
};
use walkdir::WalkDir;

#[derive(Debug, Default)]
struct Node {
    files: Vec<String>,
    dirs: BTreeMap<String, Node>,
}

impl Node {
    fn insert(&mut self, rel: &Path, is_dir: bool) {
        let mut parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some(leaf) = parts.pop() else {
            return;
        };

        let mut node = self;
        for part in parts {
            node = node.dirs.entry(part).or_default();
        }
        if is_dir {
            node.dirs.entry(leaf).or_default();
        } else {
            node.files.push(leaf);
        }
    }

    fn render(&self, indent: &str, out: &mut Vec<String>) {
        for (i, file) in self.files.iter().enumerate() {
            let last = self.dirs.is_empty() && i + 1 == self.files.len();
            out.push(format!("{indent} {} {file}", branch(last)));
        }

        let count = self.dirs.len();
        for (i, (name, child)) in self.dirs.iter().enumerate() {
            let last = i + 1 == count;
            out.push(format!("{indent} {} {name}", branch(last)));
            let next = format!("{indent}{}", if last { "   " } else { " │ " });
            child.render(&next, out);
        }
    }
}

fn branch(last: bool) -> &'static str {
    if last { "└─" } else { "├─" }
}

/// List what was generated under `project_root`, one line per entry.
///
/// Only planned paths (and their parent directories) are shown, so a
/// flattened project does not drag the rest of the working directory in.
/// Within a directory, files come before subdirectories and both are sorted
/// by name.
pub fn render_tree(project_root: &Path, layout: &PlannedLayout) -> GosproutResult<Vec<String>> {
    let planned = planned_relative_paths(layout);

    let walker = WalkDir::new(project_root)
        .min_depth(1)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|e| {
            e.path()
                .strip_prefix(project_root)
                .is_ok_and(|rel| planned.contains(rel))
        });

    let mut root = Node::default();
    for entry in walker {
        let entry = entry.map_err(|e| ApplicationError::FilesystemError {
            path: e
                .path()
                .map_or_else(|| project_root.to_path_buf(), Path::to_path_buf),
            reason: format!("Failed to read directory: {}", e),
        })?;

        if let Ok(rel) = entry.path().strip_prefix(project_root) {
            root.insert(rel, entry.file_type().is_dir());
        }
    }

    let mut lines = Vec::new();
    root.render("", &mut lines);
    Ok(lines)
}

fn planned_relative_paths(layout: &PlannedLayout) -> BTreeSet<PathBuf> {
    let base = layout.root_dir();
    let mut planned = BTreeSet::new();

    for path in layout.all_paths() {
        let Ok(rel) = path.as_path().strip_prefix(base) else {
            continue;
        };
        for ancestor in rel.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                planned.insert(ancestor.to_path_buf());
            }
        }
    }

    planned
}
