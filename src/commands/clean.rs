use std::path::PathBuf;

use dialoguer::{Confirm, MultiSelect};

use crate::config::Config;
use crate::deleter::{self, DeletionOutcome};
use crate::error::AppError;
use crate::scanner::ModuleScanner;
use crate::session::Session;
use crate::utils::{display_path, format_bytes, resolve_root};

use super::scan_with_spinner;

pub struct CleanOptions {
    pub root: Option<PathBuf>,
    pub all: bool,
    pub assume_yes: bool,
    pub verbose: bool,
}

pub fn execute_clean(options: CleanOptions) -> Result<(), AppError> {
    let config = Config::load()?;
    let root = resolve_root(options.root.clone(), &config);

    let scanner = ModuleScanner::new(options.verbose);
    let results = scan_with_spinner(&scanner, &root)?;

    let mut session = Session::default();
    session.set_results(results);

    if session.is_empty() {
        println!("No node_modules directories found under {}.", display_path(&root));
        return Ok(());
    }

    if options.all {
        session.select_all();
    } else {
        match prompt_for_selection(&mut session) {
            Ok(()) => {}
            Err(AppError::Cancelled) => {
                println!("Aborted. Nothing was deleted.");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }

    if session.selected_count() == 0 {
        println!("Nothing selected. Nothing was deleted.");
        return Ok(());
    }

    let assume_yes = options.assume_yes || config.assume_yes;
    if !assume_yes && !confirm_deletion(&session)? {
        println!("Aborted. Nothing was deleted.");
        return Ok(());
    }

    let targets = session.selected_paths();
    let outcomes = deleter::delete_all(&targets);

    report_outcomes(&session, &outcomes);
    session.apply_deletions(&outcomes);

    if !session.is_empty() {
        println!(
            "{} director(ies) remain ({}).",
            session.results().len(),
            format_bytes(session.total_size())
        );
    }

    Ok(())
}

fn prompt_for_selection(session: &mut Session) -> Result<(), AppError> {
    let labels: Vec<String> = session
        .results()
        .iter()
        .map(|result| {
            format!("{:<64} {:>12}", display_path(&result.path), format_bytes(result.size_bytes))
        })
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select node_modules directories to delete (space toggles, enter confirms)")
        .items(&labels)
        .interact_opt()?;

    let Some(chosen) = chosen else {
        return Err(AppError::Cancelled);
    };
    if chosen.is_empty() {
        return Err(AppError::Cancelled);
    }

    let paths: Vec<PathBuf> = chosen
        .iter()
        .filter_map(|&index| session.results().get(index).map(|result| result.path.clone()))
        .collect();
    for path in paths {
        session.toggle(&path);
    }

    Ok(())
}

fn confirm_deletion(session: &Session) -> Result<bool, AppError> {
    let prompt = format!(
        "Delete {} director(ies) totalling {}? This cannot be undone.",
        session.selected_count(),
        format_bytes(session.selected_size())
    );
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn report_outcomes(session: &Session, outcomes: &[DeletionOutcome]) {
    let mut freed = 0u64;
    let mut deleted = 0usize;
    let mut failed = 0usize;

    for outcome in outcomes {
        match outcome.failure() {
            None => {
                deleted += 1;
                freed = freed.saturating_add(session.size_of(&outcome.path).unwrap_or(0));
            }
            Some(reason) => {
                failed += 1;
                eprintln!("Failed to delete {}: {}", display_path(&outcome.path), reason);
            }
        }
    }

    println!("Deleted {} director(ies), freed {}.", deleted, format_bytes(freed));
    if failed > 0 {
        println!("{failed} deletion(s) failed; those directories are kept in the list.");
    }
}
