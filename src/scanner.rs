use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::error::AppError;
use crate::model::ScanResult;
use crate::size;

const MODULE_DIR_NAME: &str = "node_modules";

/// Counters updated live during a scan, safe to poll from another thread
/// while the scan runs.
#[derive(Debug, Default)]
pub struct ScanProgress {
    dirs_visited: AtomicU64,
    modules_found: AtomicU64,
}

impl ScanProgress {
    pub fn dirs_visited(&self) -> u64 {
        self.dirs_visited.load(Ordering::Relaxed)
    }

    pub fn modules_found(&self) -> u64 {
        self.modules_found.load(Ordering::Relaxed)
    }

    fn visit_dir(&self) {
        self.dirs_visited.fetch_add(1, Ordering::Relaxed);
    }

    fn found_module(&self) {
        self.modules_found.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct ModuleScanner {
    verbose: bool,
}

impl ModuleScanner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Walk `root` and report every directory named `node_modules` with its
    /// total recursive size.
    ///
    /// A matched directory is never descended into, and hidden directories
    /// (name starting with `.`) are pruned before matching. Subtrees that
    /// cannot be listed are dropped silently; only a root that is not a
    /// directory at all is a hard failure.
    ///
    /// Result order is traversal order. Callers that care must sort.
    pub fn scan(&self, root: &Path, progress: &ScanProgress) -> Result<Vec<ScanResult>, AppError> {
        if !root.is_dir() {
            return Err(AppError::InvalidRoot(root.to_path_buf()));
        }

        let matches = self.collect_matches(root, progress);

        // The match decision is final before any sizing starts; sizing of
        // independent module subtrees can then run in parallel.
        let results = matches
            .into_par_iter()
            .map(|path| {
                let size_bytes = size::compute_size(&path, self.verbose);
                ScanResult::new(path, size_bytes)
            })
            .collect();

        Ok(results)
    }

    // Explicit work stack instead of call recursion, so pathological depth
    // cannot overflow the stack.
    fn collect_matches(&self, root: &Path, progress: &ScanProgress) -> Vec<PathBuf> {
        let mut matches = Vec::new();
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            progress.visit_dir();

            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    if self.verbose {
                        eprintln!("Skipping {}: {}", dir.display(), err);
                    }
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        if self.verbose {
                            eprintln!("Skipping entry in {}: {}", dir.display(), err);
                        }
                        continue;
                    }
                };

                // file_type() does not follow symlinks, so link cycles are
                // never walked.
                let is_dir = entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false);
                if !is_dir {
                    continue;
                }

                let name = entry.file_name();
                let name = name.to_string_lossy();
                if name == MODULE_DIR_NAME {
                    progress.found_module();
                    matches.push(entry.path());
                } else if !name.starts_with('.') {
                    stack.push(entry.path());
                }
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::Path;

    use super::*;

    fn write(path: &Path, bytes: usize) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![b'x'; bytes]).unwrap();
    }

    fn scan(root: &Path) -> Vec<ScanResult> {
        ModuleScanner::new(false).scan(root, &ScanProgress::default()).unwrap()
    }

    fn by_path(results: &[ScanResult]) -> BTreeMap<PathBuf, u64> {
        results.iter().map(|r| (r.path.clone(), r.size_bytes)).collect()
    }

    #[test]
    fn finds_modules_with_exact_sizes() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("proj-a/node_modules/package.json"), 2);
        write(&root.join("proj-a/node_modules/readme.md"), 500);
        write(&root.join("proj-b/node_modules/lodash/index.js"), 20);

        let results = scan(root);
        let sizes = by_path(&results);

        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[&root.join("proj-a/node_modules")], 502);
        assert_eq!(sizes[&root.join("proj-b/node_modules")], 20);
        assert_eq!(results.iter().map(|r| r.size_bytes).sum::<u64>(), 522);
    }

    #[test]
    fn never_recurses_into_a_match() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("app/node_modules/dep/node_modules/inner.js"), 10);

        let results = scan(root);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, root.join("app/node_modules"));
        // The nested module is part of the outer one's size instead.
        assert_eq!(results[0].size_bytes, 10);

        // No result path is a strict ancestor of another.
        for a in &results {
            for b in &results {
                if a.path != b.path {
                    assert!(!b.path.starts_with(&a.path));
                }
            }
        }
    }

    #[test]
    fn hidden_directories_are_pruned_before_matching() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join(".cache/node_modules/hidden.js"), 64);
        write(&root.join("visible/node_modules/seen.js"), 8);

        let results = scan(root);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, root.join("visible/node_modules"));
    }

    #[test]
    fn hidden_entries_inside_a_match_are_counted() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("app/node_modules/.bin/cli"), 40);
        write(&root.join("app/node_modules/index.js"), 2);

        let results = scan(root);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].size_bytes, 42);
    }

    #[test]
    fn files_named_node_modules_are_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("proj/node_modules"), 5);

        assert!(scan(root).is_empty());
    }

    #[test]
    fn scan_is_idempotent_on_unchanged_tree() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("a/node_modules/x.js"), 3);
        write(&root.join("b/c/node_modules/y.js"), 7);

        assert_eq!(by_path(&scan(root)), by_path(&scan(root)));
    }

    #[test]
    fn missing_root_is_invalid() {
        let temp = tempfile::tempdir().unwrap();
        let gone = temp.path().join("nope");

        let err = ModuleScanner::new(false).scan(&gone, &ScanProgress::default()).unwrap_err();
        assert!(matches!(err, AppError::InvalidRoot(path) if path == gone));
    }

    #[test]
    fn file_root_is_invalid() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        write(&file, 1);

        let err = ModuleScanner::new(false).scan(&file, &ScanProgress::default()).unwrap_err();
        assert!(matches!(err, AppError::InvalidRoot(_)));
    }

    #[test]
    fn clean_tree_yields_empty_result() {
        let temp = tempfile::tempdir().unwrap();
        write(&temp.path().join("src/main.rs"), 10);

        assert!(scan(temp.path()).is_empty());
    }

    #[test]
    fn progress_counters_advance() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("a/node_modules/x.js"), 1);
        write(&root.join("b/node_modules/y.js"), 1);

        let progress = ScanProgress::default();
        ModuleScanner::new(false).scan(root, &progress).unwrap();

        // root, a, b at minimum; matches are not descended into.
        assert!(progress.dirs_visited() >= 3);
        assert_eq!(progress.modules_found(), 2);
    }
}
