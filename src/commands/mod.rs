use std::path::Path;
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::AppError;
use crate::model::ScanResult;
use crate::scanner::{ModuleScanner, ScanProgress};

pub mod clean;
pub mod config_cmd;
pub mod scan;

pub use clean::execute_clean;
pub use config_cmd::execute_config;
pub use scan::execute_scan;

/// Run one scan on a worker thread while a spinner reports progress, so the
/// user can always tell the scan is still running.
pub(crate) fn scan_with_spinner(
    scanner: &ModuleScanner,
    root: &Path,
) -> Result<Vec<ScanResult>, AppError> {
    let progress = ScanProgress::default();

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Scanning...");

    let outcome = thread::scope(|scope| {
        let worker = scope.spawn(|| scanner.scan(root, &progress));
        while !worker.is_finished() {
            spinner.set_message(format!(
                "Scanning... {} directories visited, {} node_modules found",
                progress.dirs_visited(),
                progress.modules_found()
            ));
            thread::sleep(Duration::from_millis(100));
        }
        worker.join()
    });

    spinner.finish_and_clear();

    match outcome {
        Ok(result) => result,
        Err(_) => Err(AppError::config("Scan worker panicked")),
    }
}
