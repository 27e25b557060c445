use super::{Excerpt, ListingError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Textual end-of-procedure token (MASM-style listings)
const ENDP_MARKER: &str = "ENDP";

/// Debug-info end-of-procedure directive (gcc/clang/rustc listings)
const CFI_ENDPROC_MARKER: &str = ".cfi_endproc";

/// Scans a listing file for the instructions emitted for `function`.
///
/// The file handle is scoped to this call and dropped on every exit path.
pub fn scan_file(path: &Path, function: &str) -> Result<Excerpt> {
    let file = File::open(path).map_err(|e| ListingError::Open {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("scanning {} for {}", path.display(), function);
    scan_lines(BufReader::new(file), function)
}

/// Scans lines for the region belonging to `function`.
///
/// The first line containing the function-name substring enters the region
/// and is kept as the header. Inside the region, an empty line or a line
/// carrying an end-of-procedure marker ends the scan without being recorded.
/// Lines starting with a tab or space are instruction lines and are recorded
/// verbatim; anything else inside the region (labels, directives flush to
/// the left) is skipped.
pub fn scan_lines<R: BufRead>(reader: R, function: &str) -> Result<Excerpt> {
    let mut excerpt = Excerpt {
        function: function.to_string(),
        header: None,
        instructions: Vec::new(),
    };

    for line in reader.lines() {
        let line = line?;

        if excerpt.header.is_none() {
            if line.contains(function) {
                log::debug!("entered region for {} at: {}", function, line.trim());
                excerpt.header = Some(line);
            }
            continue;
        }

        if line.is_empty() || line.contains(ENDP_MARKER) || line.contains(CFI_ENDPROC_MARKER) {
            break;
        }

        if line.starts_with('\t') || line.starts_with(' ') {
            excerpt.instructions.push(line);
        }
    }

    log::debug!(
        "{}: {} instruction line(s)",
        function,
        excerpt.instruction_count()
    );
    Ok(excerpt)
}
