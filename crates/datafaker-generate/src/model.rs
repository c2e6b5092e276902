use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use datafaker_core::OutputKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::generators::{DefaultComponent, NullComponent};
use crate::value::GeneratedValue;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where run directories are created.
    pub out_dir: PathBuf,
    /// Seed used when the request does not carry one.
    pub seed: u64,
    /// Attempts allowed to find a fresh value for a unique field.
    pub max_unique_retries: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            seed: 0,
            max_unique_retries: 1000,
        }
    }
}

/// One table worth of rows to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    pub table: String,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// `en_US` or `zh_CN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub fields: Vec<FieldSpec>,
}

impl GenerationRequest {
    pub fn new(table: impl Into<String>, count: u64) -> Self {
        Self {
            table: table.into(),
            count,
            seed: None,
            locale: None,
            fields: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSpec {
    pub name: String,
    pub source: FieldSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null: Option<NullComponent>,
    #[serde(default)]
    pub unique: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, source: FieldSource) -> Self {
        Self {
            name: name.into(),
            source,
            default: None,
            null: None,
            unique: false,
        }
    }

    /// Field backed by a catalog descriptor.
    pub fn descriptor(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldSource::Descriptor {
                name: descriptor.into(),
            },
        )
    }

    pub fn with_default(mut self, value: impl Into<String>, percent: u8) -> Self {
        self.default = Some(DefaultComponent::new(value, percent));
        self
    }

    pub fn with_null(mut self, percent: u8) -> Self {
        self.null = Some(NullComponent::new(percent));
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Where the values of a field come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSource {
    /// Catalog descriptor resolved through the value producer.
    Descriptor { name: String },
    Number {
        start: i64,
        end: i64,
        #[serde(default)]
        decimal_places: u8,
    },
    Sequence {
        #[serde(default = "default_sequence_start")]
        start: i64,
        #[serde(default = "default_sequence_step")]
        step: i64,
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
        #[serde(default)]
        cycle: bool,
    },
    Regex {
        pattern: String,
        #[serde(default = "default_max_repeat")]
        max_repeat: u32,
    },
}

impl FieldSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Descriptor { .. } => "descriptor",
            Self::Number { .. } => "number",
            Self::Sequence { .. } => "sequence",
            Self::Regex { .. } => "regex",
        }
    }
}

fn default_sequence_start() -> i64 {
    1
}

fn default_sequence_step() -> i64 {
    1
}

fn default_max_repeat() -> u32 {
    16
}

/// Generated rows in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<GeneratedValue>>,
}

impl Batch {
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            table: table.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&GeneratedValue>> {
        let index = self.columns.iter().position(|column| column == name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }
}

/// Body encoding of the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
    Sql,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
            Self::Sql => "sql",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(Self::Csv),
            "jsonl" => Ok(Self::Jsonl),
            "sql" => Ok(Self::Sql),
            other => Err(GenerationError::InvalidRequest(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output file settings for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTarget {
    pub format: OutputFormat,
    pub kind: OutputKind,
    pub suffix: Option<String>,
}

impl FileTarget {
    /// Custom kind with the format name as suffix, e.g. `.jsonl`.
    pub fn for_format(format: OutputFormat) -> Self {
        Self {
            format,
            kind: OutputKind::Custom,
            suffix: Some(format.as_str().to_string()),
        }
    }

    pub fn resolve_suffix(&self) -> Result<String, GenerationError> {
        Ok(self.kind.resolve_suffix(self.suffix.as_deref())?)
    }
}

impl Default for FileTarget {
    fn default() -> Self {
        Self::for_format(OutputFormat::default())
    }
}

/// Per-field counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub name: String,
    pub source: String,
    pub nulls: u64,
    pub defaults: u64,
    pub retries: u64,
}

/// Output file written by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputReport {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub suffix: String,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    pub table: String,
    pub seed: u64,
    pub locale: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub retries_total: u64,
    pub descriptor_usage: BTreeMap<String, u64>,
    pub fields: Vec<FieldReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputReport>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationReport {
    pub fn new(table: impl Into<String>, seed: u64, locale: impl Into<String>) -> Self {
        Self {
            run_id: None,
            table: table.into(),
            seed,
            locale: locale.into(),
            rows_requested: 0,
            rows_generated: 0,
            retries_total: 0,
            descriptor_usage: BTreeMap::new(),
            fields: Vec::new(),
            output: None,
            duration_ms: 0,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_json_uses_tagged_sources() {
        let raw = serde_json::json!({
            "table": "users",
            "count": 3,
            "fields": [
                {"name": "id", "source": {"kind": "sequence"}},
                {"name": "email", "source": {"kind": "descriptor", "name": "Internet"}, "unique": true},
                {"name": "score", "source": {"kind": "number", "start": 0, "end": 9}, "null": {"percent": 10}}
            ]
        });
        let request: GenerationRequest = serde_json::from_value(raw).expect("valid request");
        assert_eq!(
            request.fields[0].source,
            FieldSource::Sequence {
                start: 1,
                step: 1,
                min: None,
                max: None,
                cycle: false
            }
        );
        assert!(request.fields[1].unique);
        assert_eq!(request.fields[2].null, Some(NullComponent::new(10)));
        assert_eq!(request.seed, None);
    }

    #[test]
    fn default_target_resolves_to_format_suffix() {
        let target = FileTarget::for_format(OutputFormat::Jsonl);
        assert_eq!(target.resolve_suffix().expect("suffix"), ".jsonl");
        let image = FileTarget {
            format: OutputFormat::Csv,
            kind: OutputKind::Image,
            suffix: None,
        };
        assert_eq!(image.resolve_suffix().expect("suffix"), ".jpg");
    }
}
