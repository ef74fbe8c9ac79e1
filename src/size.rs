use std::path::Path;

use walkdir::WalkDir;

/// Total bytes of every regular file under `path`, hidden entries included.
///
/// This cannot fail, only under-report: an unlistable directory or an
/// unreadable file contributes nothing and the walk continues.
pub fn compute_size(path: &Path, verbose: bool) -> u64 {
    if path.is_file() {
        return path.metadata().map(|metadata| metadata.len()).unwrap_or(0);
    }

    let mut total = 0u64;
    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if verbose {
                    eprintln!("Skipping {:?}: {}", err.path(), err);
                }
                continue;
            }
        };

        if entry.file_type().is_file() {
            match entry.metadata() {
                Ok(metadata) => {
                    total = total.saturating_add(metadata.len());
                }
                Err(err) => {
                    if verbose {
                        eprintln!("Skipping {}: {}", entry.path().display(), err);
                    }
                }
            }
        }
    }
    total
}
