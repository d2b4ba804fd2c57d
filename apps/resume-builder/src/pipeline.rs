//! Resume pipeline — load → generate → parse → render → write.
//!
//! Every step runs once, in order. The generated YAML is saved to disk before it
//! is typed so a schema failure can be fixed by hand and re-rendered with
//! `--from-yaml`.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::info;

use crate::config::{Config, GenerationConfig, InputSource};
use crate::errors::AppError;
use crate::llm_client::prompts::YAML_SCHEMA_SYSTEM;
use crate::llm_client::{LlmClient, ResumeGenerator};
use crate::models::contact::ContactInfo;
use crate::models::resume::{parse_yaml_value, ResumeDocument, SchemaError};
use crate::prompt::load_prompt;
use crate::render::{build_plan, docx::write_docx};

/// Runs the whole pipeline and returns the path of the written document.
pub async fn run(config: &Config) -> Result<PathBuf, AppError> {
    let value = match &config.source {
        InputSource::Generate(generation) => {
            let client = build_client(generation)?;
            info!("LLM client initialized (model: {})", client.model());
            generate_yaml(&generation.prompt_file, &config.yaml_file, &client).await?
        }
        InputSource::Yaml(path) => read_yaml(path).await?,
    };

    render_document(value, config).await
}

fn build_client(generation: &GenerationConfig) -> Result<LlmClient, AppError> {
    let mut client = LlmClient::new(
        generation.api_key.clone(),
        generation.model.clone(),
        generation.max_tokens,
    )?;
    if let Some(base_url) = &generation.base_url {
        client = client.with_base_url(base_url.as_str());
    }
    if generation.schema_hint {
        client = client.with_system(YAML_SCHEMA_SYSTEM);
    }
    Ok(client)
}

/// Loads the prompt, asks `generator` for YAML, and saves the parsed YAML to `yaml_file`.
pub async fn generate_yaml(
    prompt_file: &Path,
    yaml_file: &Path,
    generator: &dyn ResumeGenerator,
) -> Result<Value, AppError> {
    let prompt = load_prompt(prompt_file).await?;
    let text = generator.generate_yaml(&prompt).await?;
    let value = parse_yaml_value(&text)?;
    save_yaml(yaml_file, &value).await?;
    Ok(value)
}

/// Writes `value` as YAML, keeping the key order the model produced.
pub async fn save_yaml(path: &Path, value: &Value) -> Result<(), AppError> {
    let text = serde_yaml::to_string(value).map_err(SchemaError::Serialize)?;
    tokio::fs::write(path, text)
        .await
        .map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Saved generated YAML to {}", path.display());
    Ok(())
}

pub async fn read_yaml(path: &Path) -> Result<Value, AppError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from_io(path, e))?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput(path.to_path_buf()));
    }
    info!("Read YAML file {}", path.display());
    Ok(parse_yaml_value(&text)?)
}

/// Types the YAML, builds the document plan, and writes the `.docx`.
pub async fn render_document(value: Value, config: &Config) -> Result<PathBuf, AppError> {
    let doc = ResumeDocument::from_value(value)?;
    let contact = ContactInfo::from_details(
        doc.details()?,
        config.github.as_deref(),
        config.linkedin.as_deref(),
    )?;
    let plan = build_plan(&doc, &contact)?;

    let output = config.output_file.clone();
    let path = output.clone();
    tokio::task::spawn_blocking(move || write_docx(&plan, &path))
        .await
        .map_err(crate::render::RenderError::from)??;

    info!("Resume for {} written to {}", contact.name, output.display());
    Ok(output)
}
