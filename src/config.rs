use std::path::PathBuf;

/// File written when the caller does not name an output path.
pub const DEFAULT_OUTPUT: &str = "zazzle.csv";
/// Number of mapped rows echoed after a successful run.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Run-level settings that are not part of the mapping rules themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Directory holding the three blocklist files.
    pub blocklist_dir: PathBuf,
    pub preview_rows: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            blocklist_dir: PathBuf::from("."),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl MapperConfig {
    pub fn with_blocklist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.blocklist_dir = dir.into();
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }
}
