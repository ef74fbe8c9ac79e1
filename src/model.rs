use std::fmt;
use std::path::{Path, PathBuf};

/// One discovered `node_modules` directory.
///
/// `path` is the unique key within a single scan's result set; `size_bytes`
/// is the best-effort total footprint computed at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl ScanResult {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        ScanResult { path, size_bytes }
    }

    pub fn path_str(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Path,
    Size,
}

impl SortField {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "path" => Some(SortField::Path),
            "size" => Some(SortField::Size),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Path => "path",
            SortField::Size => "size",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::from_name(s).ok_or_else(|| format!("Unknown sort field '{s}'"))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}
