use datafaker_generate::{
    FieldSource, FieldSpec, GenerateOptions, GeneratedValue, GenerationEngine, GenerationError,
    GenerationRequest,
};

fn number(name: &str, start: i64, end: i64) -> FieldSpec {
    FieldSpec::new(
        name,
        FieldSource::Number {
            start,
            end,
            decimal_places: 0,
        },
    )
}

#[test]
fn full_null_share_yields_only_nulls() {
    let request = GenerationRequest::new("t", 40)
        .with_seed(1)
        .with_field(FieldSpec::descriptor("name", "Name").with_null(100));
    let assembled = GenerationEngine::default().assemble(&request).expect("assemble");
    assert!(assembled.batch.rows.iter().all(|row| row[0].is_null()));
    assert_eq!(assembled.report.fields[0].nulls, 40);
}

#[test]
fn full_default_share_yields_the_default() {
    let request = GenerationRequest::new("t", 10)
        .with_field(number("n", 0, 9).with_default("fallback", 100));
    let assembled = GenerationEngine::default().assemble(&request).expect("assemble");
    for row in &assembled.batch.rows {
        assert_eq!(row[0], GeneratedValue::Text("fallback".to_string()));
    }
}

#[test]
fn unique_numbers_fill_the_range() {
    let request = GenerationRequest::new("t", 5)
        .with_seed(3)
        .with_field(number("n", 1, 5).unique());
    let assembled = GenerationEngine::default().assemble(&request).expect("assemble");
    let mut values: Vec<i64> = assembled
        .batch
        .rows
        .iter()
        .filter_map(|row| row[0].as_i64())
        .collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn unique_range_too_small_is_rejected() {
    let request = GenerationRequest::new("t", 6).with_field(number("n", 1, 5).unique());
    assert!(matches!(
        GenerationEngine::default().assemble(&request),
        Err(GenerationError::InvalidRequest(_))
    ));
}

#[test]
fn exhausted_unique_retries_fail_the_run() {
    let request = GenerationRequest::new("t", 3).with_field(
        FieldSpec::new(
            "code",
            FieldSource::Regex {
                pattern: "[ab]".to_string(),
                max_repeat: 1,
            },
        )
        .unique(),
    );
    let engine = GenerationEngine::new(GenerateOptions {
        max_unique_retries: 20,
        ..GenerateOptions::default()
    });
    assert!(matches!(
        engine.assemble(&request),
        Err(GenerationError::InvalidRequest(_))
    ));
}

#[test]
fn cycling_sequence_wraps() {
    let request = GenerationRequest::new("t", 5).with_field(FieldSpec::new(
        "id",
        FieldSource::Sequence {
            start: 1,
            step: 1,
            min: None,
            max: Some(3),
            cycle: true,
        },
    ));
    let assembled = GenerationEngine::default().assemble(&request).expect("assemble");
    let ids: Vec<i64> = assembled
        .batch
        .rows
        .iter()
        .filter_map(|row| row[0].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 1, 2]);
}

#[test]
fn short_sequence_without_cycle_is_rejected() {
    let request = GenerationRequest::new("t", 5).with_field(FieldSpec::new(
        "id",
        FieldSource::Sequence {
            start: 1,
            step: 1,
            min: None,
            max: Some(3),
            cycle: false,
        },
    ));
    assert!(GenerationEngine::default().assemble(&request).is_err());
}

#[test]
fn component_shares_above_one_hundred_are_rejected() {
    let request = GenerationRequest::new("t", 1)
        .with_field(number("n", 0, 1).with_default("x", 70).with_null(40));
    assert!(matches!(
        GenerationEngine::default().assemble(&request),
        Err(GenerationError::InvalidRequest(_))
    ));
}

#[test]
fn fields_draw_from_independent_streams() {
    let base = GenerationRequest::new("t", 20)
        .with_seed(9)
        .with_field(number("a", 0, 1_000_000));
    let extended = base.clone().with_field(number("b", 0, 1_000_000));
    let engine = GenerationEngine::default();
    let first = engine.assemble(&base).expect("base");
    let second = engine.assemble(&extended).expect("extended");
    assert_eq!(first.batch.column("a"), second.batch.column("a"));
}
