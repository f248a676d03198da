use std::path::Path;

use tracing::info;

use crate::error::LoadError;

/// Split `text` into lines without their terminators.
///
/// Both `\n` and `\r\n` endings are accepted; a final newline does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read the file at `path` into ordered lines.
pub fn load_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "source loaded");
    Ok(split_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\r\nc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_lines(Path::new("definitely/not/here.pyp")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "file not found: definitely/not/here.pyp");
    }
}
