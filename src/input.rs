//! Line-oriented input.

use crate::error::CidrError;
use std::io::Read;

/// Read the whole input, one candidate CIDR per line.
///
/// Lines are trimmed and blank lines dropped. Reading is done up front since
/// merging needs the complete set.
pub fn read_cidr_lines<R: Read>(mut reader: R) -> Result<Vec<String>, CidrError> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    let lines: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    log::debug!("read {} input lines", lines.len());
    Ok(lines)
}
