//! File and stream helpers shared by the commands.
//!
//! - Line input for the interactive `play` loop
//! - Record files with transparent `.zst` decompression
//! - Directory walking for `stats` and `verify`

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Upper bound for a decompressed record file.
const MAX_DECOMPRESSED: usize = 64 * 1024 * 1024;

/// Reads one trimmed line. `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use powerpoker_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(" 12 \nq\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("12"));
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("q"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Reads a whole text file, decompressing it first when the name ends in
/// `.zst`. A leading UTF-8 BOM is dropped.
pub fn read_text_auto(path: &Path) -> Result<String, String> {
    let is_zst = path.extension().is_some_and(|ext| ext == "zst");
    let mut content = if is_zst {
        let compressed = std::fs::read(path).map_err(|e| e.to_string())?;
        let raw = zstd::bulk::decompress(&compressed, MAX_DECOMPRESSED).map_err(|e| e.to_string())?;
        String::from_utf8(raw).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the parent directory of `path` when it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e)),
        _ => Ok(()),
    }
}

/// Whether `path` names a game record file (`.jsonl` or `.jsonl.zst`).
pub fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|name| name.ends_with(".jsonl") || name.ends_with(".jsonl.zst"))
}

/// Record files under `dir`, recursively, in sorted order. Unreadable
/// subdirectories are skipped.
pub fn collect_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&d) else {
            continue;
        };
        for entry in entries.filter_map(Result::ok) {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else if is_record_file(&p) {
                files.push(p);
            }
        }
    }
    files.sort();
    files
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some(String::new()));
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}{\"a\":1}".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "{\"a\":1}");
    }

    #[test]
    fn test_read_text_auto_plain_and_zst() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("games.jsonl");
        std::fs::write(&plain, "line\n").unwrap();
        assert_eq!(read_text_auto(&plain).unwrap(), "line\n");

        let packed = dir.path().join("games.jsonl.zst");
        let bytes = zstd::bulk::compress(b"zipped\n", 3).unwrap();
        std::fs::write(&packed, bytes).unwrap();
        assert_eq!(read_text_auto(&packed).unwrap(), "zipped\n");
    }

    #[test]
    fn test_collect_record_files_walks_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b.jsonl");
        ensure_parent_dir(&nested).unwrap();
        std::fs::write(&nested, "").unwrap();
        std::fs::write(dir.path().join("c.jsonl.zst"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = collect_record_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| is_record_file(p)));
    }
}
