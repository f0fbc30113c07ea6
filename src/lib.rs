//! Generates Qt's Windows/IANA time zone lookup tables from CLDR data.
//!
//! Parses the `common/supplemental/windowsZones.xml` file of an unpacked CLDR
//! release and rewrites the generated region of qtbase's
//! `src/corelib/time/qtimezoneprivate_data_p.h` with three lookup tables
//! (Windows-zone/territory pairs, Windows IDs, UTC pseudo-zones) backed by two
//! deduplicated string pools.
//!
//! This is a one-shot maintenance tool, run by hand when a new CLDR release
//! changes the mapping data. It either rewrites the destination file in full
//! or leaves it untouched; there is no partial output.

pub mod cldr;
pub mod editor;
mod error;
pub mod pool;
pub mod tables;
mod territory;
pub mod writer;

use std::path::{Path, PathBuf};

use chrono::Local;

pub use crate::editor::SourceFileEditor;
pub use crate::error::{wrap, Error};

/// Runs one generation pass and returns the path of the rewritten file.
///
/// Validates the two roots, reads the CLDR data, and rewrites the generated
/// region of the destination header. Any failure after the destination has
/// been opened abandons the edit, leaving the file as it was.
pub fn run(cldr_root: &Path, qt_root: &Path) -> Result<PathBuf, Error> {
    if !qt_root.is_dir() {
        return Err(Error::Usage(format!("No such Qt directory: {}", qt_root.display())));
    }
    if !cldr_root.is_dir() {
        return Err(Error::Usage(format!("No such CLDR directory: {}", cldr_root.display())));
    }
    let dest = qt_root.join("src").join("corelib").join("time").join("qtimezoneprivate_data_p.h");
    if !dest.is_file() {
        return Err(Error::Usage(format!("No such file: {}", dest.display())));
    }

    let lookup = tables::windows_id_lookup();
    let (version, defaults, records) = cldr::read_windows_time_zones(cldr_root, &lookup)?;

    println!("Input file parsed, now writing data");
    let mut editor = SourceFileEditor::open(&dest)?;
    writer::write(editor.writer(), &version, Local::now().date_naive(), &defaults, &records)?;
    editor.commit()?;
    Ok(dest)
}
