use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::app::Result;

/// Write one entry per line.
pub fn write_lines<W, I, S>(writer: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}

/// Write entries to `path`, or to stdout when no path is given.
pub fn emit<I, S>(lines: I, path: Option<&Path>) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_lines(&mut writer, lines)?;
            tracing::info!("Results saved to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_lines(&mut writer, lines)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines() {
        let mut buffer = Vec::new();
        write_lines(&mut buffer, ["b", "a"]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "b\na\n");
    }

    #[test]
    fn test_write_no_lines() {
        let mut buffer = Vec::new();
        write_lines(&mut buffer, Vec::<String>::new()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");

        emit(["http://x.com/?a=FUZZ", "http://x.com/?b=FUZZ"], Some(path.as_path())).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "http://x.com/?a=FUZZ\nhttp://x.com/?b=FUZZ\n"
        );
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("urls.txt");
        assert!(emit(["x"], Some(path.as_path())).is_err());
    }
}
