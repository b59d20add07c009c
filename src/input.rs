//! Loading the line of text to encode.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

/// The first line of `text`, without its line terminator.
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

pub fn from_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read input file {}", path.display()))?;
    Ok(first_line(&contents).to_string())
}

pub fn from_reader<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).context("read input line")?;
    Ok(first_line(&line).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_first_line() {
        assert_eq!(first_line("hello world\nsecond"), "hello world");
        assert_eq!(first_line("crlf\r\nnext"), "crlf");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("\nafter blank"), "");
    }

    #[test]
    fn reads_first_line_from_reader() {
        let line = from_reader("aaabbc\nignored\n".as_bytes()).unwrap();
        assert_eq!(line, "aaabbc");
    }

    #[test]
    fn reads_first_line_from_file() {
        let path = std::env::temp_dir().join(format!("huffcode-input-{}.txt", std::process::id()));
        fs::write(&path, "from a file\nrest\n").unwrap();

        let line = from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(line, "from a file");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = from_file(Path::new("/nonexistent/huffcode/input.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/huffcode/input.txt"));
    }
}
