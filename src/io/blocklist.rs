use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{MapperError, Result};

/// Full names of contacts already known to be duplicates.
pub const KNOWN_DUPES_FILE: &str = "known-drops.txt";
/// Email addresses that should never be mailed.
pub const DROP_EMAILS_FILE: &str = "known-drop-emails.txt";
/// Full names of contacts who opted out of physical mail.
pub const NO_MAIL_FILE: &str = "known-no-mail.txt";

/// Reads a line-delimited blocklist into a set of trimmed, non-empty entries.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_name_set(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path).map_err(|source| MapperError::BlocklistLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&contents);
    debug!(entry_count = entries.len(), "blocklist loaded");
    Ok(entries)
}

fn parse_entries(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The three read-only sets consulted by the mapper. Built once per run and
/// passed by reference into [`crate::mapper::map_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklists {
    pub known_dupe_names: HashSet<String>,
    /// Loaded and counted against the input, but not applied as a filter.
    pub drop_emails: HashSet<String>,
    pub drop_mail_names: HashSet<String>,
}

impl Blocklists {
    /// Loads the fixed blocklist files from `dir`. Any missing file is fatal.
    #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let [dupes, emails, no_mail] = blocklist_paths(dir);
        let blocklists = Self {
            known_dupe_names: load_name_set(&dupes)?,
            drop_emails: load_name_set(&emails)?,
            drop_mail_names: load_name_set(&no_mail)?,
        };
        info!(
            known_dupes = blocklists.known_dupe_names.len(),
            drop_emails = blocklists.drop_emails.len(),
            no_mail = blocklists.drop_mail_names.len(),
            "blocklists ready"
        );
        Ok(blocklists)
    }

    /// Whether a row with this full name must be excluded from the output.
    pub fn blocks_name(&self, full_name: &str) -> bool {
        self.known_dupe_names.contains(full_name) || self.drop_mail_names.contains(full_name)
    }

    pub fn blocks_email(&self, email: &str) -> bool {
        self.drop_emails.contains(email)
    }
}

/// Paths of the three blocklist files inside a directory, in load order.
pub fn blocklist_paths(dir: &Path) -> [PathBuf; 3] {
    [
        dir.join(KNOWN_DUPES_FILE),
        dir.join(DROP_EMAILS_FILE),
        dir.join(NO_MAIL_FILE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entries_are_trimmed_and_blank_lines_dropped() {
        let entries = parse_entries("  Jane Doe  \n\n\t\nJohn Roe\r\nJane Doe\n");
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("Jane Doe"));
        assert!(entries.contains("John Roe"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("absent.txt");
        let err = load_name_set(&path).unwrap_err();
        match err {
            MapperError::BlocklistLoad { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_from_dir_reads_all_three_sets() {
        let dir = tempdir().expect("temporary directory");
        let [dupes, emails, no_mail] = blocklist_paths(dir.path());
        fs::write(dupes, "Dupe Person\n").expect("dupes written");
        fs::write(emails, "spam@example.com\n\n").expect("emails written");
        fs::write(no_mail, "Quiet Person\n").expect("no-mail written");

        let blocklists = Blocklists::load_from_dir(dir.path()).expect("blocklists loaded");
        assert!(blocklists.blocks_name("Dupe Person"));
        assert!(blocklists.blocks_name("Quiet Person"));
        assert!(!blocklists.blocks_name("quiet person"));
        assert!(blocklists.blocks_email("spam@example.com"));
    }

    #[test]
    fn load_from_dir_fails_when_one_file_is_missing() {
        let dir = tempdir().expect("temporary directory");
        fs::write(dir.path().join(KNOWN_DUPES_FILE), "").expect("dupes written");
        fs::write(dir.path().join(NO_MAIL_FILE), "").expect("no-mail written");

        let err = Blocklists::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, MapperError::BlocklistLoad { .. }));
    }
}
