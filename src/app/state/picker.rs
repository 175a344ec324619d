//! Modal selector states: the CSV file picker and the agent selector.

use std::path::{Path, PathBuf};

use crate::api::Agent;

/// State of the CSV file picker overlay.
///
/// The picker lists `*.csv` entries only — an extension filter, nothing
/// more. File contents are never inspected client-side.
#[derive(Debug, Clone, Default)]
pub struct FilePickerState {
    /// Directory that was scanned.
    pub dir: PathBuf,
    /// CSV files found, sorted by path.
    pub entries: Vec<PathBuf>,
    /// Highlighted entry.
    pub cursor: usize,
    /// Set when the directory could not be read.
    pub error: Option<String>,
}

impl FilePickerState {
    /// Scan `dir` for CSV files.
    #[must_use]
    pub fn scan(dir: &Path) -> Self {
        match std::fs::read_dir(dir) {
            Ok(read) => {
                let mut entries: Vec<PathBuf> = read
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| {
                        path.is_file()
                            && path
                                .extension()
                                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
                    })
                    .collect();
                entries.sort();
                Self {
                    dir: dir.to_path_buf(),
                    entries,
                    cursor: 0,
                    error: None,
                }
            }
            Err(err) => Self {
                dir: dir.to_path_buf(),
                entries: Vec::new(),
                cursor: 0,
                error: Some(format!("Cannot read {}: {err}", dir.display())),
            },
        }
    }

    /// Move the highlight up.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// The highlighted file, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Path> {
        self.entries.get(self.cursor).map(PathBuf::as_path)
    }
}

/// State of the agent selector overlay.
///
/// Holds a snapshot of the roster taken when the overlay opened, so the
/// control only ever offers ids that were actually loaded.
#[derive(Debug, Clone, Default)]
pub struct AgentSelectorState {
    /// Agents offered for selection.
    pub agents: Vec<Agent>,
    /// Highlighted entry.
    pub cursor: usize,
}

impl AgentSelectorState {
    /// Build a selector over a roster snapshot.
    #[must_use]
    pub const fn with_agents(agents: Vec<Agent>) -> Self {
        Self { agents, cursor: 0 }
    }

    /// Move the highlight up.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.agents.len() {
            self.cursor += 1;
        }
    }

    /// The highlighted agent, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Agent> {
        self.agents.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scan_lists_only_csv_files_sorted() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("west.csv"), "name,phone_number\n")?;
        std::fs::write(dir.path().join("EAST.CSV"), "name,phone_number\n")?;
        std::fs::write(dir.path().join("notes.txt"), "not leads")?;
        std::fs::create_dir(dir.path().join("nested.csv"))?;

        let picker = FilePickerState::scan(dir.path());
        assert_eq!(picker.error, None);
        let names: Vec<_> = picker
            .entries
            .iter()
            .filter_map(|p| p.file_name())
            .collect();
        assert_eq!(names, vec!["EAST.CSV", "west.csv"]);
        Ok(())
    }

    #[test]
    fn scan_missing_directory_reports_error() {
        let picker = FilePickerState::scan(Path::new("/nonexistent/leads"));
        assert!(picker.entries.is_empty());
        assert!(picker.error.is_some());
    }

    #[test]
    fn cursor_stays_in_bounds() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("a.csv"), "x")?;
        std::fs::write(dir.path().join("b.csv"), "x")?;

        let mut picker = FilePickerState::scan(dir.path());
        picker.move_up();
        assert_eq!(picker.cursor, 0);
        picker.move_down();
        assert_eq!(picker.cursor, 1);
        picker.move_down();
        assert_eq!(picker.cursor, 1);
        assert!(picker.selected().is_some_and(|p| p.ends_with("b.csv")));
        Ok(())
    }

    #[test]
    fn empty_selector_has_no_selection() {
        let mut selector = AgentSelectorState::default();
        selector.move_down();
        assert_eq!(selector.cursor, 0);
        assert!(selector.selected().is_none());
    }

    #[test]
    fn selector_offers_snapshot_in_order() {
        let agents = vec![
            Agent {
                id: "a1".to_string(),
                name: Some("Alpha".to_string()),
            },
            Agent {
                id: "a2".to_string(),
                name: None,
            },
        ];
        let mut selector = AgentSelectorState::with_agents(agents);
        assert_eq!(selector.selected().map(|a| a.id.as_str()), Some("a1"));
        selector.move_down();
        assert_eq!(selector.selected().map(|a| a.id.as_str()), Some("a2"));
    }
}
