use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::model::ScanResult;

/// The set of selected results, keyed by path rather than list position, so
/// membership is unaffected by reordering.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selected: HashSet<PathBuf>,
}

impl SelectionStore {
    pub fn toggle(&mut self, path: &Path) {
        if !self.selected.remove(path) {
            self.selected.insert(path.to_path_buf());
        }
    }

    pub fn select_all<'a>(&mut self, paths: impl IntoIterator<Item = &'a Path>) {
        self.selected = paths.into_iter().map(Path::to_path_buf).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selected.contains(path)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop members whose path no longer appears in `results`.
    pub fn retain_present(&mut self, results: &[ScanResult]) {
        let live: HashSet<&Path> = results.iter().map(|result| result.path.as_path()).collect();
        self.selected.retain(|path| live.contains(path.as_path()));
    }
}
