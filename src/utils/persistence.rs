use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{core::utils::ensure_dir, domain::ExpenseRecord, errors::Result};

const TMP_SUFFIX: &str = "tmp";

/// Encodes the full record sequence as a JSON array.
pub fn encode_records(records: &[ExpenseRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Decodes a JSON array of records, preserving order.
pub fn decode_records(data: &str) -> Result<Vec<ExpenseRecord>> {
    Ok(serde_json::from_str(data)?)
}

/// Writes `data` to `path` by staging to a sibling temporary file and renaming it.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
