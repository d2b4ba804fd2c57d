use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::cli::Args;

/// Everything needed to call the model.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub prompt_file: PathBuf,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub schema_hint: bool,
    /// Alternate API host from `ANTHROPIC_BASE_URL`.
    pub base_url: Option<String>,
}

/// Where the resume YAML comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Generate(GenerationConfig),
    Yaml(PathBuf),
}

/// Run configuration assembled from the command line and the environment.
/// `.env` must already be loaded so clap's `env` fallbacks can see it.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: InputSource,
    pub output_file: PathBuf,
    pub yaml_file: PathBuf,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let source = match args.from_yaml {
            Some(path) => InputSource::Yaml(path),
            None => {
                let prompt_file = args
                    .prompt_file
                    .context("A prompt file is required unless --from-yaml is given")?;
                let api_key = args
                    .api_key
                    .filter(|k| !k.trim().is_empty())
                    .context("An API key is required: pass it as an argument or set CLAUDE_API_KEY")?;
                let model = args.model.trim().to_string();
                if model.is_empty() {
                    bail!("Model name must not be empty");
                }
                InputSource::Generate(GenerationConfig {
                    prompt_file,
                    api_key,
                    model,
                    max_tokens: args.max_tokens,
                    schema_hint: args.schema_hint,
                    base_url: optional_env("ANTHROPIC_BASE_URL"),
                })
            }
        };

        if args.output_file.extension().and_then(|e| e.to_str()) != Some("docx") {
            warn!(
                "Output file {} does not end in .docx",
                args.output_file.display()
            );
        }

        Ok(Config {
            source,
            output_file: args.output_file,
            yaml_file: args.yaml_file,
            github: args.github,
            linkedin: args.linkedin,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("build-resume").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_generate_source_from_positionals() {
        let config = Config::from_args(parse(&["prompt.txt", "key-123", "claude-x"])).unwrap();
        match config.source {
            InputSource::Generate(generation) => {
                assert_eq!(generation.prompt_file, PathBuf::from("prompt.txt"));
                assert_eq!(generation.api_key, "key-123");
                assert_eq!(generation.model, "claude-x");
            }
            InputSource::Yaml(_) => panic!("expected generation source"),
        }
        assert_eq!(config.output_file, PathBuf::from("resume.docx"));
    }

    #[test]
    fn test_from_yaml_needs_no_key() {
        let mut args = parse(&["--from-yaml", "points.yaml"]);
        args.api_key = None;
        let config = Config::from_args(args).unwrap();
        assert!(matches!(config.source, InputSource::Yaml(ref p) if p == &PathBuf::from("points.yaml")));
    }

    #[test]
    fn test_missing_prompt_file_is_error() {
        let mut args = parse(&[]);
        args.prompt_file = None;
        let err = Config::from_args(args).unwrap_err();
        assert!(err.to_string().contains("prompt file is required"));
    }

    #[test]
    fn test_blank_api_key_is_error() {
        let mut args = parse(&["prompt.txt"]);
        args.api_key = Some("   ".into());
        let err = Config::from_args(args).unwrap_err();
        assert!(err.to_string().contains("API key is required"));
    }
}
