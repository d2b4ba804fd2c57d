use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::resume::SchemaError;
use crate::render::RenderError;

/// Application-level error type.
/// Every stage of the pipeline converts into this so `main` sees one error chain.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied reading {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{} is empty", .0.display())]
    EmptyInput(PathBuf),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("LLM request failed")]
    Llm(#[from] LlmError),

    #[error("Resume YAML rejected")]
    Schema(#[from] SchemaError),

    #[error("Rendering the document failed")]
    Render(#[from] RenderError),
}

impl AppError {
    /// Maps an `io::Error` from reading `path` onto the matching variant.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => AppError::PermissionDenied(path),
            _ => AppError::Io { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::parse_yaml_value;
    use anyhow::Context;

    fn chain(err: AppError) -> String {
        let err = Err::<(), _>(err)
            .context("Resume generation failed")
            .unwrap_err();
        format!("{err:#}")
    }

    #[test]
    fn test_yaml_error_chain_prints_each_cause_once() {
        let inner = serde_yaml::from_str::<serde_yaml::Value>("a: [x")
            .unwrap_err()
            .to_string();
        let err = AppError::from(parse_yaml_value("a: [x").unwrap_err());

        let printed = chain(err);
        assert!(
            printed.starts_with("Resume generation failed: Resume YAML rejected: invalid YAML: "),
            "{printed}"
        );
        assert_eq!(printed.matches(inner.as_str()).count(), 1, "{printed}");
    }

    #[test]
    fn test_io_error_chain_prints_source_once() {
        let source = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let printed = chain(AppError::from_io("points.yaml", source));
        assert_eq!(
            printed,
            "Resume generation failed: I/O error on points.yaml: disk on fire"
        );
    }

    #[test]
    fn test_llm_error_chain_prints_api_message_once() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: "bad key".into(),
        });
        let printed = chain(err);
        assert_eq!(
            printed,
            "Resume generation failed: LLM request failed: API error (status 401): bad key"
        );
    }
}
