use std::io::{self, Write};

use super::CountingWriter;
use crate::model::Batch;

/// One `INSERT` statement per row.
pub fn write_batch_sql<W: Write>(writer: W, batch: &Batch) -> io::Result<u64> {
    let mut writer = CountingWriter::new(writer);
    let table = quote_identifier(&batch.table);
    let columns = batch
        .columns
        .iter()
        .map(|column| quote_identifier(column))
        .collect::<Vec<_>>()
        .join(", ");

    for row in &batch.rows {
        let values = row
            .iter()
            .map(|value| value.to_sql_literal())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "INSERT INTO {table} ({columns}) VALUES ({values});")?;
    }
    writer.flush()?;
    Ok(writer.bytes_written())
}

/// Double-quoted identifier with embedded quotes doubled.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::GeneratedValue;

    #[test]
    fn renders_quoted_inserts() {
        let mut batch = Batch::new("people", vec!["id".to_string(), "name".to_string()]);
        batch.rows.push(vec![
            GeneratedValue::Int(7),
            GeneratedValue::Text("O'Hara".to_string()),
        ]);
        let mut out = Vec::new();
        write_batch_sql(&mut out, &batch).expect("sql");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "INSERT INTO \"people\" (\"id\", \"name\") VALUES (7, 'O''Hara');\n"
        );
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
