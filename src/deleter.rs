use std::fs;
use std::io;
use std::path::PathBuf;

/// Outcome of one removal attempt.
#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub path: PathBuf,
    pub result: Result<(), String>,
}

impl DeletionOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    pub fn failure(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }
}

/// Recursively remove each path, continuing past per-path failures.
///
/// A path that is already gone counts as removed. The caller is responsible
/// for confirming with the user beforehand; nothing here prompts.
pub fn delete_all(paths: &[PathBuf]) -> Vec<DeletionOutcome> {
    paths
        .iter()
        .map(|path| {
            let result = match fs::remove_dir_all(path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.to_string()),
            };
            DeletionOutcome { path: path.clone(), result }
        })
        .collect()
}
