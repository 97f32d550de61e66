//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod highlight;
pub mod info;
pub mod parse_evaluation;
pub mod prompt;
pub mod providers;
#[cfg(feature = "mcp")]
pub mod serve;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a document and validate its size against the configured limit.
///
/// `-` reads standard input. Files are size-checked from metadata before
/// they are read into memory.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        markwise_core::check_input_size(&content, max_bytes)
            .context("standard input rejected")?;
        return Ok(content);
    }

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Name to show for an input path.
pub fn display_name(path: &Utf8Path) -> &str {
    if path.as_str() == STDIN_PATH {
        "<stdin>"
    } else {
        path.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("doc.md")).unwrap();
        std::fs::write(&path, "Hello there.").unwrap();
        assert_eq!(read_input(&path, Some(100)).unwrap(), "Hello there.");
        assert_eq!(read_input(&path, None).unwrap(), "Hello there.");
    }

    #[test]
    fn rejects_oversized_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.md")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let err = read_input(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_input(Utf8Path::new("/no/such/file.md"), None).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.md"));
    }

    #[test]
    fn stdin_display_name() {
        assert_eq!(display_name(Utf8Path::new("-")), "<stdin>");
        assert_eq!(display_name(Utf8Path::new("a.md")), "a.md");
    }
}
