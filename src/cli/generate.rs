use anyhow::{bail, Context, Result};
use std::fs;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::Config;
use crate::extract::{self, GeneratedAnswer};
use crate::fields::{RequestFields, SystemKind, TableCondition, ValidationType};
use crate::llm::factory;
use crate::llm::ModelClient;
use crate::prompt::query_generation_prompt;
use crate::table::Table;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    source_system: Option<String>,
    target_system: Option<String>,
    validation: Option<String>,
    source_table: Option<String>,
    target_table: Option<String>,
    source_condition: Option<String>,
    target_condition: Option<String>,
    source_column: String,
    target_column: String,
    source_logic: String,
    target_logic: String,
    temperature: Option<f32>,
    top_p: Option<f32>,
    config_path: Option<String>,
    model_override: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let mut config = Config::load_with_path(config_path)?;

    if let Some(ref model) = model_override {
        info!("CLI override: model = {}", model);
        config.llm.model = model.clone();
    }

    let fields = collect_fields(
        source_system,
        target_system,
        validation,
        source_table,
        target_table,
        source_condition,
        target_condition,
        source_column,
        target_column,
        source_logic,
        target_logic,
        temperature.unwrap_or(config.generation.temperature),
        top_p.unwrap_or(config.generation.top_p),
    )?;

    if !dry_run {
        super::require_api_key(&config)?;
    }

    let client = factory::create_client(&config, dry_run)?;
    let answer = run_request(client.as_ref(), &fields).await?;

    println!("Generated Query");
    println!("{}", answer.sql_query);
    if !answer.explanation.is_empty() {
        println!("\nExplanation");
        println!("{}", answer.explanation);
    }
    if !answer.note.is_empty() {
        println!("\nNote");
        println!("{}", answer.note);
    }

    Ok(())
}

/// The request pipeline: precondition check, key verification, prompt
/// build, generation, extraction. Verification is repeated here before
/// every generation attempt even when the key was already verified on its
/// own; a known inefficiency kept for parity with the original flow.
pub async fn run_request(
    client: &dyn ModelClient,
    fields: &RequestFields,
) -> Result<GeneratedAnswer> {
    fields.validate()?;

    if !client.verify_key().await {
        bail!("API key is invalid. Please check and try again.");
    }

    let prompt = query_generation_prompt(fields);
    debug!("Generation prompt:\n{}", prompt);

    let response = client
        .generate(&prompt, fields.temperature, fields.top_p)
        .await?;

    Ok(extract::extract(&response))
}

/// Assemble one explicit RequestFields value from raw CLI inputs.
#[allow(clippy::too_many_arguments)]
fn collect_fields(
    source_system: Option<String>,
    target_system: Option<String>,
    validation: Option<String>,
    source_table: Option<String>,
    target_table: Option<String>,
    source_condition: Option<String>,
    target_condition: Option<String>,
    source_column: String,
    target_column: String,
    source_logic: String,
    target_logic: String,
    temperature: f32,
    top_p: f32,
) -> Result<RequestFields> {
    Ok(RequestFields {
        source_system: parse_or_default(source_system, SystemKind::NotSelected)?,
        target_system: parse_or_default(target_system, SystemKind::NotSelected)?,
        validation_type: parse_or_default(validation, ValidationType::NotSelected)?,
        source_table: load_table(source_table)?,
        target_table: load_table(target_table)?,
        source_condition: parse_optional::<TableCondition>(source_condition)?,
        target_condition: parse_optional::<TableCondition>(target_condition)?,
        source_column,
        target_column,
        source_logic,
        target_logic,
        temperature,
        top_p,
    })
}

fn parse_or_default<T: FromStr<Err = anyhow::Error>>(value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(s) => s.parse(),
        None => Ok(default),
    }
}

fn parse_optional<T: FromStr<Err = anyhow::Error>>(value: Option<String>) -> Result<Option<T>> {
    value.map(|s| s.parse()).transpose()
}

/// Read a pasted table sample from a file. A missing flag or an all-blank
/// file both count as "no table provided".
fn load_table(path: Option<String>) -> Result<Option<Table>> {
    let path = match path {
        Some(p) => p,
        None => return Ok(None),
    };
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read table file: {}", path))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(Table::parse_tsv(&content)?))
}
