use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Generated value for one cell of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    /// Cell text for CSV; `Null` becomes an empty cell.
    pub fn to_csv(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => value.to_string(),
            GeneratedValue::Text(value) | GeneratedValue::Uuid(value) => value.clone(),
            GeneratedValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            GeneratedValue::Time(value) => value.format("%H:%M:%S").to_string(),
            GeneratedValue::Timestamp(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            GeneratedValue::Null => Value::Null,
            GeneratedValue::Bool(value) => Value::Bool(*value),
            GeneratedValue::Int(value) => Value::from(*value),
            GeneratedValue::Float(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            other => Value::String(other.to_csv()),
        }
    }

    /// SQL literal with single quotes escaped.
    pub fn to_sql_literal(&self) -> String {
        match self {
            GeneratedValue::Null => "NULL".to_string(),
            GeneratedValue::Bool(value) => {
                if *value {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) if value.is_finite() => value.to_string(),
            GeneratedValue::Float(_) => "NULL".to_string(),
            other => format!("'{}'", other.to_csv().replace('\'', "''")),
        }
    }

    /// Stable key used for uniqueness checks.
    pub fn unique_key(&self) -> String {
        match self {
            GeneratedValue::Null => "\u{0}null".to_string(),
            other => other.to_csv(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) | GeneratedValue::Uuid(value) => Some(value.as_str()),
            _ => None,
        }
    }
}
