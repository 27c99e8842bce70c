//! Report output.
//! - Objects: keys sorted (serde_json's default map is ordered)
//! - Arrays: order preserved (caller is responsible for stable ordering)
//! - Output: pretty-printed, trailing newline
//! - Atomic write: temp file in same dir + fsync(temp) + rename; direct write
//!   fallback when the rename fails (e.g., cross-device).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::IoResult;

/// Pretty JSON bytes with a trailing newline.
pub fn to_pretty_bytes(v: &Value) -> IoResult<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(v)?;
    out.push(b'\n');
    Ok(out)
}

/// Write `v` to `path` atomically, creating the parent directory if needed.
pub fn write_json_atomic(path: &Path, v: &Value) -> IoResult<()> {
    let bytes = to_pretty_bytes(v)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let tmp = make_unique_tmp_path(path);
    let mut tf = OpenOptions::new().write(true).create_new(true).open(&tmp)?;
    tf.write_all(&bytes)?;
    tf.sync_all()?;
    drop(tf);

    if fs::rename(&tmp, path).is_err() {
        let res = fs::write(path, &bytes);
        let _ = fs::remove_file(&tmp);
        res?;
    }
    debug!(path = %path.display(), bytes = bytes.len(), "report written");
    Ok(())
}

/// "<filename>.<pid>.<counter>.tmp" next to `target`.
fn make_unique_tmp_path(target: &Path) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let pid = std::process::id();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let fname = target.file_name().and_then(|s| s.to_str()).unwrap_or("report");
    let tmp_name = format!("{fname}.{pid}.{n}.tmp");

    match target.parent() {
        Some(dir) => dir.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn pretty_bytes_end_with_newline_and_sorted_keys() {
        let bytes = to_pretty_bytes(&json!({"b": 1, "a": 2})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
    }

    #[test]
    fn atomic_write_creates_dirs_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/out/report.json");
        let v = json!({"winner": null, "results": [{"id": "C1", "votes": 0}]});
        write_json_atomic(&target, &v).unwrap();

        let back: Value = serde_json::from_slice(&fs::read(&target).unwrap()).unwrap();
        assert_json_eq!(back, v);

        let leftovers: Vec<_> = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
