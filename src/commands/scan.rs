use std::path::PathBuf;

use crate::config::Config;
use crate::error::AppError;
use crate::model::{ScanResult, SortDirection, SortField};
use crate::scanner::ModuleScanner;
use crate::sort;
use crate::utils::{display_path, format_bytes, resolve_root};

use super::scan_with_spinner;

pub struct ScanOptions {
    pub root: Option<PathBuf>,
    pub sort: SortField,
    pub ascending: bool,
    pub verbose: bool,
}

pub fn execute_scan(options: ScanOptions) -> Result<Vec<ScanResult>, AppError> {
    let config = Config::load()?;
    let root = resolve_root(options.root.clone(), &config);

    let scanner = ModuleScanner::new(options.verbose);
    let mut results = scan_with_spinner(&scanner, &root)?;

    let direction =
        if options.ascending { SortDirection::Ascending } else { SortDirection::Descending };
    sort::sort_results(&mut results, options.sort, direction);

    print_results(&results, &root);
    Ok(results)
}

fn print_results(results: &[ScanResult], root: &std::path::Path) {
    if results.is_empty() {
        println!("No node_modules directories found under {}.", display_path(root));
        return;
    }

    println!("Found {} node_modules director(ies) under {}:", results.len(), display_path(root));
    for result in results {
        println!("  {:<64} {:>12}", display_path(&result.path), format_bytes(result.size_bytes));
    }

    let total: u64 = results.iter().map(|result| result.size_bytes).sum();
    println!("Total reclaimable: {}", format_bytes(total));
}
