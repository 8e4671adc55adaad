use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vocab_protocol::SourceRef;

use crate::error::RunError;

/// A discovered `.txt` file and what its name says about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub source: SourceRef,
}

impl InputFile {
    /// Marking rules feed answer variations but never the counts.
    pub fn is_marking_rules(&self) -> bool {
        self.source.file_name.contains("marking_rules")
    }
}

/// Non-recursive listing of `*.txt` files in `dir`, sorted by name.
pub fn discover(dir: &Path) -> Result<Vec<InputFile>, RunError> {
    if !dir.is_dir() {
        return Err(RunError::InputDirMissing(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| RunError::ListDir { path: dir.to_path_buf(), source })?;

    let mut files: Vec<InputFile> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            name.ends_with(".txt").then(|| InputFile {
                path: entry.path(),
                source: SourceRef::from_file_name(&name),
            })
        })
        .collect();
    files.sort_by(|a, b| a.source.file_name.cmp(&b.source.file_name));

    debug!(dir = %dir.display(), count = files.len(), "input files discovered");
    Ok(files)
}

/// Read a file as UTF-8 text. Any failure is logged and yields `None`.
pub fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_protocol::FileCategory;

    #[test]
    fn test_discover_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2020_script.txt", "2019_answer.txt", "notes.md", "2019_marking_rules_answer.txt"] {
            fs::write(dir.path().join(name), "text").unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = discover(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.source.file_name.as_str()).collect();
        assert_eq!(names, vec!["2019_answer.txt", "2019_marking_rules_answer.txt", "2020_script.txt"]);
        assert_eq!(files[0].source.category, FileCategory::Answer);
        assert!(files[1].is_marking_rules());
        assert_eq!(files[1].source.category, FileCategory::Answer);
    }

    #[test]
    fn test_missing_directory() {
        let err = discover(Path::new("/no/such/input/dir")).unwrap_err();
        assert!(matches!(err, RunError::InputDirMissing(_)));
    }

    #[test]
    fn test_read_text_failures_are_none() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        fs::write(&bad, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert_eq!(read_text(&bad), None);
        assert_eq!(read_text(&dir.path().join("missing.txt")), None);

        let good = dir.path().join("good.txt");
        fs::write(&good, "fine").unwrap();
        assert_eq!(read_text(&good).as_deref(), Some("fine"));
    }
}
