use std::path::PathBuf;

use clap::Parser;

use crate::llm_client::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

/// Generate a tailored resume from a text prompt using Claude, rendered as a Word document.
#[derive(Parser, Debug)]
#[command(name = "build-resume", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the prompt text file (resume details plus the target job description)
    pub prompt_file: Option<PathBuf>,

    /// Anthropic API key
    #[arg(env = "CLAUDE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Claude model name, e.g. claude-sonnet-4-5-20250929
    #[arg(env = "CLAUDE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Word document to write
    #[arg(long, default_value = "resume.docx")]
    pub output_file: PathBuf,

    /// Where the generated YAML is saved before rendering
    #[arg(long, default_value = "points.yaml")]
    pub yaml_file: PathBuf,

    /// Maximum tokens the model may generate
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: u32,

    /// GitHub profile URL (overrides the YAML value)
    #[arg(long)]
    pub github: Option<String>,

    /// LinkedIn profile URL (overrides the YAML value)
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Send a system prompt describing the expected YAML layout
    #[arg(long)]
    pub schema_hint: bool,

    /// Render an existing YAML file instead of calling the API
    #[arg(long, conflicts_with = "prompt_file")]
    pub from_yaml: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from([
            "build-resume",
            "prompt.txt",
            "sk-ant-key",
            "claude-opus-4-1",
            "--output-file",
            "out.docx",
        ])
        .unwrap();
        assert_eq!(args.prompt_file, Some(PathBuf::from("prompt.txt")));
        assert_eq!(args.api_key.as_deref(), Some("sk-ant-key"));
        assert_eq!(args.model, "claude-opus-4-1");
        assert_eq!(args.output_file, PathBuf::from("out.docx"));
        assert_eq!(args.yaml_file, PathBuf::from("points.yaml"));
        assert_eq!(args.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(!args.schema_hint);
    }

    #[test]
    fn test_from_yaml_conflicts_with_prompt_file() {
        let result =
            Args::try_parse_from(["build-resume", "prompt.txt", "--from-yaml", "points.yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let result = Args::try_parse_from(["build-resume", "prompt.txt", "--max-tokens", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
