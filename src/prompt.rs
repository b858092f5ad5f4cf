//! Prompt template for query generation.

use crate::fields::{or_not_provided, RequestFields, NOT_PROVIDED};

/// Build the generation prompt from one request's fields.
///
/// Deterministic: the same fields always produce the same string. Optional
/// fields that are absent are embedded as the literal "Not provided" so the
/// model sees an explicit slot for every detail.
pub fn query_generation_prompt(fields: &RequestFields) -> String {
    let source_table = match &fields.source_table {
        Some(table) => table.to_string(),
        None => NOT_PROVIDED.to_string(),
    };
    let target_table = match &fields.target_table {
        Some(table) => table.to_string(),
        None => NOT_PROVIDED.to_string(),
    };
    let source_condition = fields
        .source_condition
        .map(|c| c.as_str())
        .unwrap_or(NOT_PROVIDED);
    let target_condition = fields
        .target_condition
        .map(|c| c.as_str())
        .unwrap_or(NOT_PROVIDED);

    format!(
        r#"You are a database expert. Generate a database query according to selected Source System and target system technology and based on following details and :

Source System: {source_system}
Target System: {target_system}
Validation Type: {validation_type}
Source Table: {source_table}
Target Table: {target_table}
Source Condition: {source_condition}
Source Column: {source_column}
Source Logic: {source_logic}
Target Condition: {target_condition}
Target Column: {target_column}
Target Logic: {target_logic}

Generate an appropriate query:
"#,
        source_system = fields.source_system.prompt_value(),
        target_system = fields.target_system.prompt_value(),
        validation_type = fields.validation_type,
        source_table = source_table,
        target_table = target_table,
        source_condition = source_condition,
        source_column = or_not_provided(&fields.source_column),
        source_logic = or_not_provided(&fields.source_logic),
        target_condition = target_condition,
        target_column = or_not_provided(&fields.target_column),
        target_logic = or_not_provided(&fields.target_logic),
    )
}
