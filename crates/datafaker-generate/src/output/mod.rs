//! Batch sinks. Every writer reports the bytes it produced.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::GenerationError;
use crate::model::{Batch, OutputFormat};

pub mod csv;
pub mod jsonl;
pub mod sql;

/// Write `batch` to `path` in the given format.
pub fn write_batch_file(
    path: &Path,
    batch: &Batch,
    format: OutputFormat,
) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    write_batch(writer, batch, format)
}

pub fn write_batch<W: Write>(
    writer: W,
    batch: &Batch,
    format: OutputFormat,
) -> Result<u64, GenerationError> {
    match format {
        OutputFormat::Csv => Ok(csv::write_batch_csv(writer, batch)?),
        OutputFormat::Jsonl => jsonl::write_batch_jsonl(writer, batch),
        OutputFormat::Sql => Ok(sql::write_batch_sql(writer, batch)?),
    }
}

pub(crate) struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    pub(crate) fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
