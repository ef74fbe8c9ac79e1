use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::deleter::DeletionOutcome;
use crate::model::{ScanResult, SortField};
use crate::selection::SelectionStore;
use crate::sort::{self, SortState};

/// In-memory state for one scan's result set: the results, the selection
/// and the current sort, owned together so the same logic drives the
/// interactive flow and runs headless under test.
#[derive(Debug, Default)]
pub struct Session {
    results: Vec<ScanResult>,
    selection: SelectionStore,
    sort: SortState,
}

impl Session {
    /// Install a fresh result set, clearing any previous selection and
    /// applying the default ordering (size, descending).
    pub fn set_results(&mut self, results: Vec<ScanResult>) {
        self.results = results;
        self.selection.clear();
        self.sort = SortState::default();
        sort::sort_results(&mut self.results, self.sort.field, self.sort.direction);
    }

    pub fn results(&self) -> &[ScanResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Re-sort by `field` with the toggle rule. Selection is keyed by path,
    /// so reordering cannot disturb it.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort.select(field);
        sort::sort_results(&mut self.results, self.sort.field, self.sort.direction);
    }

    /// Toggle selection of `path`. Paths outside the result set are ignored,
    /// keeping the selection a subset of what is on screen.
    pub fn toggle(&mut self, path: &Path) {
        if self.results.iter().any(|result| result.path == path) {
            self.selection.toggle(path);
        }
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.results.iter().map(|result| result.path.as_path()));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selection.is_selected(path)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    /// Derived, never stored: true when every result is selected.
    pub fn all_selected(&self) -> bool {
        !self.results.is_empty() && self.selection.count() == self.results.len()
    }

    /// Selected paths in current display order.
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.results
            .iter()
            .filter(|result| self.selection.is_selected(&result.path))
            .map(|result| result.path.clone())
            .collect()
    }

    pub fn total_size(&self) -> u64 {
        self.results.iter().map(|result| result.size_bytes).sum()
    }

    pub fn selected_size(&self) -> u64 {
        self.results
            .iter()
            .filter(|result| self.selection.is_selected(&result.path))
            .map(|result| result.size_bytes)
            .sum()
    }

    pub fn size_of(&self, path: &Path) -> Option<u64> {
        self.results.iter().find(|result| result.path == path).map(|result| result.size_bytes)
    }

    /// Reconcile after a deletion attempt: only paths with a confirmed
    /// success leave the result set, so a failed deletion stays visible.
    /// The selection is then pruned to the surviving results.
    pub fn apply_deletions(&mut self, outcomes: &[DeletionOutcome]) {
        let removed: HashSet<&Path> = outcomes
            .iter()
            .filter(|outcome| outcome.succeeded())
            .map(|outcome| outcome.path.as_path())
            .collect();
        self.results.retain(|result| !removed.contains(result.path.as_path()));
        self.selection.retain_present(&self.results);
    }
}
