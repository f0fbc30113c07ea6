//! Scoped editing of the generated region of a source file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;

const START_MARKER: &str = "GENERATED PART STARTS HERE";
const END_MARKER: &str = "GENERATED PART ENDS HERE";

/// Rewrites the delimited generated region of a source file, preserving
/// everything outside the markers byte for byte.
///
/// Replacement content is buffered in memory and nothing touches the
/// destination until [`commit`](Self::commit), which writes a sibling
/// temporary file and renames it over the original. Dropping the editor
/// without committing leaves the file exactly as it was.
pub struct SourceFileEditor {
    path: PathBuf,
    /// Prelude up to and including the start-marker line, with the
    /// replacement content appended as it is written.
    buffer: String,
    /// End-marker line and everything after it.
    tail: String,
}

impl SourceFileEditor {
    /// Opens `path` and locates the generated region.
    ///
    /// Missing markers are a data error: the destination is not a file this
    /// tool knows how to update.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;

        let start = text.find(START_MARKER).ok_or_else(|| {
            Error::Data(format!("no '{}' marker in {}", START_MARKER, path.display()))
        })?;
        let head_end = match text[start..].find('\n') {
            Some(i) => start + i + 1,
            None => text.len(),
        };
        let end = text[head_end..].find(END_MARKER).map(|i| head_end + i).ok_or_else(|| {
            Error::Data(format!("no '{}' marker in {}", END_MARKER, path.display()))
        })?;
        // Keep the whole line holding the end marker.
        let tail_start = text[..end].rfind('\n').map(|i| i + 1).unwrap_or(0);

        Ok(Self {
            path: path.to_owned(),
            buffer: text[..head_end].to_owned(),
            tail: text[tail_start..].to_owned(),
        })
    }

    /// Sink for the replacement content of the generated region.
    pub fn writer(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Writes the edited file next to the original, then renames it into
    /// place, so a failure part-way leaves no partial destination file.
    pub fn commit(mut self) -> Result<(), Error> {
        self.buffer.push_str(&self.tail);

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &self.buffer)
            .map_err(|e| Error::Io(io::Error::new(e.kind(), format!("{}: {}", tmp.display(), e))))?;
        fs::rename(&tmp, &self.path).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::SourceFileEditor;
    use crate::error::Error;

    const TEMPLATE: &str = "\
// preamble that must survive\n\
// GENERATED PART STARTS HERE\n\
old generated line one\n\
old generated line two\n\
// GENERATED PART ENDS HERE\n\
// trailer that must survive\n";

    #[test]
    fn commit_replaces_only_the_generated_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_p.h");
        fs::write(&path, TEMPLATE).unwrap();

        let mut editor = SourceFileEditor::open(&path).unwrap();
        editor.writer().push_str("fresh content\n");
        editor.commit().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "// preamble that must survive\n\
             // GENERATED PART STARTS HERE\n\
             fresh content\n\
             // GENERATED PART ENDS HERE\n\
             // trailer that must survive\n"
        );
        // No stray temporary left behind.
        assert!(!dir.path().join("data_p.h.tmp").exists());
    }

    #[test]
    fn dropping_without_commit_leaves_the_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_p.h");
        fs::write(&path, TEMPLATE).unwrap();

        {
            let mut editor = SourceFileEditor::open(&path).unwrap();
            editor.writer().push_str("half-written content that must not land\n");
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn missing_markers_are_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_p.h");
        fs::write(&path, "// no markers here\n").unwrap();

        match SourceFileEditor::open(&path) {
            Err(Error::Data(message)) => assert!(message.contains("STARTS"), "{}", message),
            other => panic!("expected a data error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_end_marker_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_p.h");
        fs::write(&path, "// GENERATED PART STARTS HERE\nno end in sight\n").unwrap();

        match SourceFileEditor::open(&path) {
            Err(Error::Data(message)) => assert!(message.contains("ENDS"), "{}", message),
            other => panic!("expected a data error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SourceFileEditor::open(&dir.path().join("absent.h"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
