use std::io::Write;

use serde_json::{Map, Value};

use super::CountingWriter;
use crate::errors::GenerationError;
use crate::model::Batch;

/// One JSON object per line, keyed by column name.
pub fn write_batch_jsonl<W: Write>(writer: W, batch: &Batch) -> Result<u64, GenerationError> {
    let mut writer = CountingWriter::new(writer);
    for row in &batch.rows {
        let object: Map<String, Value> = batch
            .columns
            .iter()
            .zip(row)
            .map(|(column, value)| (column.clone(), value.to_json()))
            .collect();
        serde_json::to_writer(&mut writer, &object)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(writer.bytes_written())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::GeneratedValue;

    #[test]
    fn one_object_per_row() {
        let mut batch = Batch::new("t", vec!["id".to_string(), "ok".to_string()]);
        batch
            .rows
            .push(vec![GeneratedValue::Int(1), GeneratedValue::Bool(true)]);
        batch.rows.push(vec![GeneratedValue::Int(2), GeneratedValue::Null]);

        let mut out = Vec::new();
        let bytes = write_batch_jsonl(&mut out, &batch).expect("jsonl");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines[0], serde_json::json!({"id": 1, "ok": true}));
        assert_eq!(lines[1], serde_json::json!({"id": 2, "ok": null}));
        assert_eq!(bytes, text.len() as u64);
    }
}
