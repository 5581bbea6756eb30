// src/input.rs
// =============================================================================
// Reads the input file and turns it into candidate links.
//
// The file is read line by line; a read error halfway through aborts the
// whole run, so callers never see a partial candidate list. Bytes that are
// not valid UTF-8 are replaced, never fatal.
// =============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::checker::extract_line_links;
use crate::error::{Result, ScanError};

// Reads `path` and returns every link url in document order
pub fn read_candidates(path: &Path) -> Result<Vec<String>> {
    let read_error = |source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(read_error)?);
    let mut candidates = Vec::new();
    let mut buf = Vec::new();

    // Lines are read as bytes: prose in another encoding must not hide the
    // links on the lines around it.
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_error)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        candidates.extend(extract_line_links(&line).into_iter().map(|link| link.url));
    }

    tracing::debug!(path = %path.display(), count = candidates.len(), "extracted candidate links");
    Ok(candidates)
}
