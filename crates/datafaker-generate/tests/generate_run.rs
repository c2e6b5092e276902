use std::fs;
use std::path::PathBuf;

use datafaker_core::OutputKind;
use datafaker_generate::{
    FileTarget, GenerateOptions, GenerationEngine, GenerationError, GenerationRequest,
    OutputFormat,
};

fn load_request() -> GenerationRequest {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../requests/users.request.json");
    let contents =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing json at {}", path.display()));
    serde_json::from_str(&contents).expect("parse request")
}

fn engine_in(label: &str) -> GenerationEngine {
    let options = GenerateOptions {
        out_dir: temp_out_dir(label),
        ..GenerateOptions::default()
    };
    GenerationEngine::new(options)
}

#[test]
fn generate_is_deterministic() {
    let request = load_request();
    let target = FileTarget::default();

    let result_a = engine_in("run_a").run(&request, &target).expect("run A");
    let result_b = engine_in("run_b").run(&request, &target).expect("run B");

    let users_a = fs::read_to_string(result_a.run_dir.join("users.csv")).expect("read users A");
    let users_b = fs::read_to_string(result_b.run_dir.join("users.csv")).expect("read users B");
    assert_eq!(users_a, users_b, "users.csv should be deterministic");
    assert_eq!(result_a.batch, result_b.batch);
}

#[test]
fn different_seeds_change_the_rows() {
    let request = load_request();
    let engine = GenerationEngine::default();
    let first = engine.assemble(&request).expect("assemble");
    let second = engine
        .assemble(&request.clone().with_seed(7))
        .expect("assemble");
    assert_ne!(first.batch.rows, second.batch.rows);
}

#[test]
fn generate_writes_report_with_row_counts() {
    let request = load_request();
    let result = engine_in("run_rows")
        .run(&request, &FileTarget::for_format(OutputFormat::Jsonl))
        .expect("run generation");

    assert!(result.output_path.ends_with("users.jsonl"));
    let lines = fs::read_to_string(&result.output_path).expect("read jsonl");
    assert_eq!(lines.lines().count(), 50);

    let report_path = result.run_dir.join("generation_report.json");
    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(&report_path).expect("read generation_report.json"),
    )
    .expect("parse report");
    assert_eq!(report["rows_generated"].as_u64(), Some(50));
    assert_eq!(report["seed"].as_u64(), Some(42));
    assert_eq!(report["fields"].as_array().map(Vec::len), Some(7));
    assert!(report["output"]["bytes_written"].as_u64().unwrap_or(0) > 0);
}

#[test]
fn output_kind_picks_the_suffix() {
    let request = load_request();
    let target = FileTarget {
        format: OutputFormat::Sql,
        kind: OutputKind::Document,
        suffix: Some("xlsx".to_string()),
    };
    let result = engine_in("run_kind").run(&request, &target).expect("run");
    assert!(result.output_path.ends_with("users.xlsx"));
    let body = fs::read_to_string(&result.output_path).expect("read sql");
    assert!(body.starts_with("INSERT INTO \"users\""));
}

#[test]
fn custom_kind_without_suffix_fails_before_writing() {
    let request = load_request();
    let out_dir = temp_out_dir("run_suffix");
    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: out_dir.clone(),
        ..GenerateOptions::default()
    });
    let target = FileTarget {
        format: OutputFormat::Csv,
        kind: OutputKind::Custom,
        suffix: None,
    };
    let err = engine.run(&request, &target).expect_err("suffix required");
    assert!(matches!(err, GenerationError::Catalog(_)));
    assert_eq!(fs::read_dir(&out_dir).expect("out dir").count(), 0);
}

#[test]
fn failed_run_still_writes_report() {
    let mut request = load_request();
    request.fields[1].source = datafaker_generate::FieldSource::Descriptor {
        name: "No Such Generator".to_string(),
    };
    let out_dir = temp_out_dir("run_failed");
    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: out_dir.clone(),
        ..GenerateOptions::default()
    });
    let err = engine
        .run(&request, &FileTarget::default())
        .expect_err("lookup miss");
    assert!(matches!(
        err,
        GenerationError::Catalog(datafaker_core::Error::LookupMiss(_))
    ));

    let run_dir = fs::read_dir(&out_dir)
        .expect("out dir")
        .next()
        .expect("run dir")
        .expect("entry")
        .path();
    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(run_dir.join("generation_report.json")).expect("report"),
    )
    .expect("parse report");
    assert!(report["error"].as_str().is_some());
}

#[test]
fn chinese_locale_request_runs_end_to_end() {
    let mut request = load_request();
    request.locale = Some("zh_CN".to_string());
    let result = engine_in("run_zh")
        .run(&request, &FileTarget::default())
        .expect("run zh_CN generation");

    assert_eq!(result.report.locale, "zh_CN");
    assert_eq!(result.batch.len(), 50);
    let names = result.batch.column("full_name").expect("full_name column");
    assert!(
        names
            .iter()
            .all(|value| value.as_str().is_some_and(|name| !name.is_empty()))
    );
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("datafaker_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
