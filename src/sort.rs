use std::cmp::Ordering;

use crate::model::{ScanResult, SortDirection, SortField};

/// Reorder `results` in place by the given field and direction.
///
/// Path comparison is case-insensitive; sizes compare by magnitude. The sort
/// is stable, so equal keys keep their relative order.
pub fn sort_results(results: &mut [ScanResult], field: SortField, direction: SortDirection) {
    match field {
        SortField::Path => results.sort_by(|a, b| {
            let a_key = a.path.to_string_lossy().to_lowercase();
            let b_key = b.path.to_string_lossy().to_lowercase();
            directed(a_key.cmp(&b_key), direction)
        }),
        SortField::Size => {
            results.sort_by(|a, b| directed(a.size_bytes.cmp(&b.size_bytes), direction))
        }
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Current sort choice plus the field-selection rule: picking the active
/// field again flips direction, picking a new field resets to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        SortState { field: SortField::Size, direction: SortDirection::Descending }
    }
}
