use std::io::Write;

use super::CountingWriter;
use crate::model::Batch;

/// Header row, then one record per row. `Null` becomes an empty cell.
pub fn write_batch_csv<W: Write>(writer: W, batch: &Batch) -> Result<u64, csv::Error> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(&batch.columns)?;
    for row in &batch.rows {
        writer.write_record(row.iter().map(|value| value.to_csv()))?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::GeneratedValue;

    #[test]
    fn quotes_cells_and_blanks_nulls() {
        let mut batch = Batch::new("people", vec!["id".to_string(), "note".to_string()]);
        batch.rows.push(vec![
            GeneratedValue::Int(1),
            GeneratedValue::Text("a, b".to_string()),
        ]);
        batch
            .rows
            .push(vec![GeneratedValue::Int(2), GeneratedValue::Null]);

        let mut out = Vec::new();
        let bytes = write_batch_csv(&mut out, &batch).expect("csv");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "id,note\n1,\"a, b\"\n2,\n");
        assert_eq!(bytes, text.len() as u64);
    }
}
