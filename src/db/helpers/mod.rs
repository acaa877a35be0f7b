use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

use crate::db::codec;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

/// Read a diary file into rows of exactly `width` fields.
///
/// Returns `None` when the file does not exist or holds no lines at all.
/// The first non-blank line is the header and must have `width` fields; data
/// lines of any other width are skipped with a warning.
pub fn read_table(path: &Path, width: usize) -> Result<Option<Vec<Vec<String>>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = codec::decode(line)
            .with_context(|| format!("{}:{}: malformed line", path.display(), number + 1))?;

        if fields.len() != width {
            if rows.is_empty() {
                bail!(
                    "{}: header has {} fields, expected {}",
                    path.display(),
                    fields.len(),
                    width
                );
            }
            log_warn!(
                "{}:{}: skipping row with {} fields (expected {})",
                path.display(),
                number + 1,
                fields.len(),
                width
            );
            continue;
        }

        rows.push(fields);
    }

    if rows.is_empty() {
        return Ok(None);
    }
    Ok(Some(rows))
}

/// True when `path` is missing or holds only blank lines, i.e. a writer must
/// start over with a header. Matches what [`read_table`] treats as absent.
pub fn needs_header(path: &Path) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.lines().all(|line| line.trim().is_empty())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(err) => Err(err).with_context(|| format!("failed to inspect {}", path.display())),
    }
}
