//! Prompt loader — reads the prompt file and hands its contents on untouched.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Reads the prompt file at `path`.
///
/// The contents are returned exactly as stored. A file holding only whitespace
/// is rejected so no API call is spent on it.
pub async fn load_prompt(path: &Path) -> Result<String, AppError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from_io(path, e))?;

    if text.trim().is_empty() {
        return Err(AppError::EmptyInput(path.to_path_buf()));
    }

    info!("Read prompt file {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_prompt_returns_contents_unchanged() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = "  Resume: Jane Doe\nJob: Rust engineer\n\n";
        file.write_all(body.as_bytes()).unwrap();

        let loaded = load_prompt(file.path()).await.unwrap();
        assert_eq!(loaded, body);
    }

    #[tokio::test]
    async fn test_load_prompt_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("prompt.txt");

        let err = load_prompt(&missing).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref p) if p == &missing));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_load_prompt_rejects_blank_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"   \n\t\n").unwrap();

        let err = load_prompt(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyInput(_)));
    }

    #[tokio::test]
    async fn test_load_prompt_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_prompt(dir.path()).await.unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
