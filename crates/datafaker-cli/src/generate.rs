use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use datafaker_core::OutputKind;
use datafaker_generate::{
    FileTarget, GenerateOptions, GenerationEngine, GenerationRequest, OutputFormat, SqliteStore,
    Store,
};

use crate::config::Settings;
use crate::{CliError, parse_format, parse_kind};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Request file (JSON, see `datafaker schema`).
    #[arg(long, value_name = "FILE")]
    pub request: PathBuf,
    /// Parent directory for run directories.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
    /// Output kind selecting the file suffix (defaults to custom).
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<OutputKind>,
    #[arg(long)]
    pub suffix: Option<String>,
    /// Also insert the rows into this SQLite database.
    #[arg(long, value_name = "URL")]
    pub sqlite: Option<String>,
    /// Overrides the request seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Overrides the request locale.
    #[arg(long)]
    pub locale: Option<String>,
}

pub async fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let timer = Instant::now();
    let contents = std::fs::read_to_string(&args.request)?;
    let mut request: GenerationRequest = serde_json::from_str(&contents)?;
    if args.seed.is_some() {
        request.seed = args.seed;
    }
    request.locale = args
        .locale
        .or(request.locale)
        .or_else(|| Some(settings.locale.clone()));

    let format = args.format.unwrap_or(settings.format);
    let target = file_target(format, args.kind, args.suffix);
    let options = GenerateOptions {
        out_dir: args.out_dir.unwrap_or_else(|| settings.out_dir.clone()),
        seed: settings.seed.unwrap_or_default(),
        ..GenerateOptions::default()
    };

    tracing::info!(
        event = "generate_started",
        request = %args.request.display(),
        table = %request.table,
        format = %target.format,
        kind = %target.kind
    );

    let engine = GenerationEngine::new(options);
    let result = engine.run(&request, &target)?;
    println!("run_dir={}", result.run_dir.display());
    println!("output={}", result.output_path.display());

    if let Some(url) = args.sqlite {
        let store = SqliteStore::connect(&url).await?;
        store.ensure_table(&result.batch).await?;
        let inserted = store.insert_batch(&result.batch).await?;
        tracing::info!(event = "rows_inserted", backend = store.backend(), rows = inserted);
        println!("inserted={inserted}");
    }

    tracing::info!(
        event = "generate_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

/// Custom kinds fall back to the format name as suffix.
fn file_target(
    format: OutputFormat,
    kind: Option<OutputKind>,
    suffix: Option<String>,
) -> FileTarget {
    let kind = kind.unwrap_or(OutputKind::Custom);
    let suffix = match suffix {
        Some(suffix) => Some(suffix),
        None if kind.is_custom() => Some(format.as_str().to_string()),
        None => None,
    };
    FileTarget {
        format,
        kind,
        suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_targets_default_to_format_suffix() {
        let target = file_target(OutputFormat::Sql, None, None);
        assert_eq!(target.kind, OutputKind::Custom);
        assert_eq!(target.resolve_suffix().expect("suffix"), ".sql");
    }

    #[test]
    fn fixed_kinds_keep_their_default_suffix() {
        let target = file_target(OutputFormat::Csv, Some(OutputKind::Compression), None);
        assert_eq!(target.resolve_suffix().expect("suffix"), ".zip");
        let target = file_target(OutputFormat::Csv, Some(OutputKind::Image), Some("png".into()));
        assert_eq!(target.resolve_suffix().expect("suffix"), ".png");
    }

    #[tokio::test]
    async fn writes_run_and_inserts_into_sqlite() {
        let dir = std::env::temp_dir().join(format!("datafaker_cli_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("dir");
        let request_path = dir.join("request.json");
        let request = serde_json::json!({
            "table": "items",
            "count": 4,
            "fields": [{"name": "n", "source": {"kind": "number", "start": 1, "end": 9}}]
        });
        std::fs::write(&request_path, request.to_string()).expect("write request");

        let args = GenerateArgs {
            request: request_path,
            out_dir: Some(dir.join("out")),
            format: Some(OutputFormat::Jsonl),
            kind: None,
            suffix: None,
            sqlite: Some("sqlite::memory:".to_string()),
            seed: Some(1),
            locale: None,
        };
        run_generate(args, &Settings::default()).await.expect("generate");
        let runs = std::fs::read_dir(dir.join("out")).expect("runs").count();
        assert_eq!(runs, 1);
    }
}
