//! Writing log exports to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write export lines to `path`, one per line.
///
/// The parent directory must already exist; a missing directory surfaces as
/// the underlying I/O error so the console can record the failure.
pub fn write_lines<I, S>(path: &Path, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_entry() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("export.txt");
        write_lines(&path, ["[12:00:00] first", "[12:00:01] second"]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[12:00:00] first\n[12:00:01] second\n");
    }

    #[test]
    fn empty_export_creates_an_empty_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");
        write_lines(&path, Vec::<String>::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("export.txt");
        assert!(write_lines(&path, ["line"]).is_err());
    }
}
