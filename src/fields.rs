//! Structured inputs for one query-generation request.
//!
//! The whole request is collected into an explicit [`RequestFields`] value
//! built once per submission and passed by value into the prompt builder and
//! the model client; there is no ambient state between submissions.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

use crate::table::Table;

/// Placeholder embedded in the prompt for every absent optional field.
pub const NOT_PROVIDED: &str = "Not provided";

/// A source or target database system, including the not-selected sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemKind {
    #[default]
    NotSelected,
    SqlServer,
    Oracle,
    Rdbms,
    FlatFiles,
}

impl SystemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemKind::NotSelected => "--Select--",
            SystemKind::SqlServer => "SQL Server",
            SystemKind::Oracle => "Oracle",
            SystemKind::Rdbms => "RDBMS",
            SystemKind::FlatFiles => "Flat Files",
        }
    }

    /// Value embedded in the prompt: the display name, or the placeholder
    /// when no system was selected.
    pub fn prompt_value(&self) -> &'static str {
        match self {
            SystemKind::NotSelected => NOT_PROVIDED,
            other => other.as_str(),
        }
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SystemKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "sql server" | "sqlserver" => Ok(SystemKind::SqlServer),
            "oracle" => Ok(SystemKind::Oracle),
            "rdbms" => Ok(SystemKind::Rdbms),
            "flat files" | "flatfiles" => Ok(SystemKind::FlatFiles),
            _ => bail!("Unknown system: {}", s),
        }
    }
}

/// The category of database-testing check requested, forwarded verbatim
/// into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationType {
    #[default]
    NotSelected,
    Select,
    Update,
    DuplicateCheck,
    NullValues,
    AggregateFunction,
    RecordCount,
    CompareRecords,
}

impl ValidationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::NotSelected => "--Select--",
            ValidationType::Select => "Select",
            ValidationType::Update => "Update",
            ValidationType::DuplicateCheck => "Check for Duplicate",
            ValidationType::NullValues => "Null Values",
            ValidationType::AggregateFunction => "Aggregate Function",
            ValidationType::RecordCount => "Record count",
            ValidationType::CompareRecords => "Compare source and target records",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValidationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "select" => Ok(ValidationType::Select),
            "update" => Ok(ValidationType::Update),
            "duplicate" | "check for duplicate" => Ok(ValidationType::DuplicateCheck),
            "null" | "null values" => Ok(ValidationType::NullValues),
            "aggregate" | "aggregate function" => Ok(ValidationType::AggregateFunction),
            "record count" | "count" => Ok(ValidationType::RecordCount),
            "compare" | "compare source and target records" => {
                Ok(ValidationType::CompareRecords)
            }
            _ => bail!("Unknown validation type: {}", s),
        }
    }
}

/// Per-table condition clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCondition {
    OrderBy,
    GroupBy,
}

impl TableCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableCondition::OrderBy => "Order by",
            TableCondition::GroupBy => "Group by",
        }
    }
}

impl fmt::Display for TableCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableCondition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "order by" | "orderby" => Ok(TableCondition::OrderBy),
            "group by" | "groupby" => Ok(TableCondition::GroupBy),
            _ => bail!("Unknown condition: {}", s),
        }
    }
}

/// Everything collected for one generation request.
#[derive(Debug, Clone)]
pub struct RequestFields {
    pub source_system: SystemKind,
    pub target_system: SystemKind,
    pub validation_type: ValidationType,
    pub source_table: Option<Table>,
    pub target_table: Option<Table>,
    pub source_condition: Option<TableCondition>,
    pub target_condition: Option<TableCondition>,
    pub source_column: String,
    pub target_column: String,
    pub source_logic: String,
    pub target_logic: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for RequestFields {
    fn default() -> Self {
        Self {
            source_system: SystemKind::NotSelected,
            target_system: SystemKind::NotSelected,
            validation_type: ValidationType::NotSelected,
            source_table: None,
            target_table: None,
            source_condition: None,
            target_condition: None,
            source_column: String::new(),
            target_column: String::new(),
            source_logic: String::new(),
            target_logic: String::new(),
            temperature: 1.0,
            top_p: 0.95,
        }
    }
}

impl RequestFields {
    /// Check the preconditions for issuing a request. The target table is
    /// the one mandatory field; randomness controls must be in range.
    pub fn validate(&self) -> Result<()> {
        match &self.target_table {
            Some(table) if !table.is_empty() => {}
            _ => bail!("Please enter target table details."),
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            bail!("Temperature must be between 0.0 and 2.0");
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            bail!("Top P must be between 0.0 and 1.0");
        }
        Ok(())
    }
}

/// Absent free-text fields become the placeholder, never an empty slot.
pub fn or_not_provided(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with_target() -> RequestFields {
        RequestFields {
            target_table: Some(Table::parse_tsv("id\tname\n1\talice").unwrap()),
            ..RequestFields::default()
        }
    }

    #[test]
    fn test_system_from_str() {
        assert_eq!(SystemKind::from_str("sql-server").unwrap(), SystemKind::SqlServer);
        assert_eq!(SystemKind::from_str("Oracle").unwrap(), SystemKind::Oracle);
        assert_eq!(SystemKind::from_str("flat_files").unwrap(), SystemKind::FlatFiles);
        assert!(SystemKind::from_str("mongodb").is_err());
    }

    #[test]
    fn test_validation_type_from_str() {
        assert_eq!(
            ValidationType::from_str("check-for-duplicate").unwrap(),
            ValidationType::DuplicateCheck
        );
        assert_eq!(
            ValidationType::from_str("Record count").unwrap(),
            ValidationType::RecordCount
        );
        assert!(ValidationType::from_str("bogus").is_err());
    }

    #[test]
    fn test_condition_from_str() {
        assert_eq!(TableCondition::from_str("order-by").unwrap(), TableCondition::OrderBy);
        assert_eq!(TableCondition::from_str("Group by").unwrap(), TableCondition::GroupBy);
        assert!(TableCondition::from_str("having").is_err());
    }

    #[test]
    fn test_prompt_value_for_unselected_system() {
        assert_eq!(SystemKind::NotSelected.prompt_value(), NOT_PROVIDED);
        assert_eq!(SystemKind::Oracle.prompt_value(), "Oracle");
    }

    #[test]
    fn test_validate_requires_target_table() {
        let fields = RequestFields::default();
        let err = fields.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter target table details.");
    }

    #[test]
    fn test_validate_rejects_header_only_target_table() {
        let fields = RequestFields {
            target_table: Some(Table::parse_tsv("id\tname").unwrap()),
            ..RequestFields::default()
        };
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults_with_target_table() {
        assert!(fields_with_target().validate().is_ok());
    }

    #[test]
    fn test_validate_temperature_range() {
        let mut fields = fields_with_target();
        fields.temperature = 2.5;
        assert!(fields.validate().is_err());
        fields.temperature = 0.0;
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_validate_top_p_range() {
        let mut fields = fields_with_target();
        fields.top_p = 1.1;
        assert!(fields.validate().is_err());
        fields.top_p = 1.0;
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_or_not_provided() {
        assert_eq!(or_not_provided(""), NOT_PROVIDED);
        assert_eq!(or_not_provided("   "), NOT_PROVIDED);
        assert_eq!(or_not_provided("customer_id"), "customer_id");
    }
}
